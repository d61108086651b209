//! Ministries grid (`#events`).
//!
//! Cards reveal in sequence, each delayed by a fixed step after the previous.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::{MinistriesContent, MinistryCard};
use smflx_core::motion::stagger_delay_css;

use crate::components::common::{Eyebrow, SplitHeading};
use crate::components::hooks::{ScrollReveal, use_scroll_reveal};
use crate::components::icons as ic;
use crate::components::reveal::{Motion, reveal_class};
use crate::config::stagger;

stylance::import_crate_style!(css, "src/components/ministries/ministries.module.css");

#[component]
pub fn Ministries(ministries: MinistriesContent) -> impl IntoView {
    let ScrollReveal { revealed, node_ref } = use_scroll_reveal();
    let MinistriesContent {
        eyebrow,
        heading,
        intro,
        cards,
    } = ministries;

    view! {
        <section id="events" class=css::ministries node_ref=node_ref>
            <div class=css::container>
                <div class=move || reveal_class(css::header, Motion::FromBelow, revealed.get())>
                    <div class=css::headline>
                        <Eyebrow label=eyebrow />
                        <SplitHeading heading=heading heading_class=css::heading />
                    </div>
                    <p class=css::intro>{intro}</p>
                </div>

                <div class=css::grid>
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! { <Card card=card index=index revealed=revealed /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(card: MinistryCard, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let MinistryCard { title, tag, image } = card;

    view! {
        <div
            class=move || reveal_class(css::card, Motion::FromFarBelow, revealed.get())
            style:transition-delay=stagger_delay_css(index, stagger::MINISTRY_STEP_MS)
        >
            <div class=css::poster>
                <img class=css::image src=image alt=title.clone() />
                <div class=css::shade>
                    <span class=css::tag>{tag}</span>
                    <h3 class=css::shadeTitle>{title.clone()}</h3>
                </div>
            </div>
            <div class=css::caption>
                <h3 class=css::title>{title}</h3>
                <div class=css::arrow>
                    <Icon icon=ic::ARROW_RIGHT />
                </div>
            </div>
        </div>
    }
}
