//! Resources grid: sermons, books, galleries and media.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::{ResourceItem, ResourcesContent};
use smflx_core::motion::stagger_delay_css;

use crate::components::hooks::{ScrollReveal, use_scroll_reveal};
use crate::components::icons as ic;
use crate::components::reveal::{Motion, reveal_class};
use crate::config::stagger;

stylance::import_crate_style!(css, "src/components/resources/resources.module.css");

#[component]
pub fn Resources(resources: ResourcesContent) -> impl IntoView {
    let ScrollReveal { revealed, node_ref } = use_scroll_reveal();
    let ResourcesContent {
        intro,
        heading,
        items,
    } = resources;

    view! {
        <section id="resources" class=css::resources node_ref=node_ref>
            <div class=css::container>
                <div class=move || reveal_class(css::header, Motion::FromBelow, revealed.get())>
                    <p class=css::intro>{intro}</p>
                    <h2 class=css::heading>
                        {heading.lead}
                        <br />
                        <span class=css::highlight>{heading.emphasis}</span>
                    </h2>
                </div>

                <div class=css::grid>
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| view! { <Item item=item index=index revealed=revealed /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Item(item: ResourceItem, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let style = item.style();
    let icon = ic::resource(item.icon);

    view! {
        <div
            class=move || reveal_class(css::item, Motion::FromFarBelow, revealed.get())
            style:transition-delay=stagger_delay_css(index, stagger::RESOURCE_STEP_MS)
        >
            <div class=css::tile style=style>
                <div class=css::badge>
                    <Icon icon=icon />
                </div>
                <h3 class=css::title>{item.title}</h3>
            </div>
        </div>
    }
}
