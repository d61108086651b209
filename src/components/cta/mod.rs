//! "Join the move" call to action.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::CallToAction;

use crate::components::hooks::{ScrollReveal, use_scroll_reveal};
use crate::components::icons as ic;
use crate::components::reveal::{Motion, reveal_class};

stylance::import_crate_style!(css, "src/components/cta/cta.module.css");

#[component]
pub fn Cta(cta: CallToAction) -> impl IntoView {
    let ScrollReveal { revealed, node_ref } = use_scroll_reveal();
    let CallToAction {
        background,
        heading,
        primary_label,
        secondary_label,
        testimonial,
        partner_avatars,
        partner_count,
    } = cta;

    view! {
        <section class=css::cta node_ref=node_ref>
            <div class=css::backdrop>
                <img
                    class=move || reveal_class(css::background, Motion::ZoomOut, revealed.get())
                    src=background
                    alt="Joining"
                />
            </div>

            <div class=css::container>
                <div class=css::grid>
                    <div class=move || reveal_class(css::pitch, Motion::FromBelow, revealed.get())>
                        <h2 class=css::heading>
                            {heading.lead}
                            <br />
                            <span class=css::emphasis>{heading.emphasis}</span>
                        </h2>
                        <div class=css::buttons>
                            <button class=css::primary>
                                <span class=css::buttonLabel>{primary_label}</span>
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                            <button class=css::secondary>{secondary_label}</button>
                        </div>
                    </div>

                    <div
                        class=move || reveal_class(css::aside, Motion::FromRight, revealed.get())
                        style:transition-delay="300ms"
                    >
                        <div class=css::testimonial>
                            <p class=css::quote>{testimonial}</p>
                            <div class=css::partners>
                                <div class=css::avatars>
                                    {partner_avatars
                                        .into_iter()
                                        .map(|src| view! { <img class=css::avatar src=src alt="Partner" /> })
                                        .collect_view()}
                                </div>
                                <span class=css::count>{partner_count}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
