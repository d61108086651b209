//! "Genesis & Vision" section (`#about`).

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::AboutContent;

use crate::components::common::{Eyebrow, SplitHeading};
use crate::components::hooks::{ScrollReveal, use_scroll_reveal};
use crate::components::icons as ic;
use crate::components::reveal::{Motion, reveal_class};

stylance::import_crate_style!(css, "src/components/about/about.module.css");

#[component]
pub fn About(about: AboutContent) -> impl IntoView {
    let ScrollReveal { revealed, node_ref } = use_scroll_reveal();

    view! {
        <section id="about" class=css::about node_ref=node_ref>
            <div class=css::grid>
                <div class=move || reveal_class(css::story, Motion::FromLeft, revealed.get())>
                    <Eyebrow label=about.eyebrow />
                    <SplitHeading heading=about.heading heading_class=css::heading />
                    <div class=css::text>
                        <p class=css::lead>{about.lead}</p>
                        <p class=css::body>{about.body}</p>
                    </div>
                    <div class=css::actions>
                        <button class=css::cta>
                            <span class=css::ctaLabel>{about.cta_label}</span>
                            <div class=css::ctaShine></div>
                        </button>
                    </div>
                </div>

                <div
                    class=move || reveal_class(css::visual, Motion::FromRight, revealed.get())
                    style:transition-delay="300ms"
                >
                    <div class=css::glow></div>
                    <div class=css::frame>
                        <div class=css::imageWrap>
                            <img class=css::image src=about.image alt=about.image_alt />
                        </div>
                        <div class=css::quoteCard>
                            <div class=css::quoteIcon>
                                <Icon icon=ic::SPARKLES />
                            </div>
                            <p class=css::quote>{about.quote}</p>
                            <div class=css::quoteRule></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
