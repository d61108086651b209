//! "Vehicle of obedience" section: layered images beside the mission copy.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::VehicleContent;

use crate::components::common::{Eyebrow, SplitHeading};
use crate::components::hooks::{ScrollReveal, use_scroll_reveal};
use crate::components::icons as ic;
use crate::components::reveal::{Motion, reveal_class};

stylance::import_crate_style!(css, "src/components/vehicle/vehicle.module.css");

#[component]
pub fn Vehicle(vehicle: VehicleContent) -> impl IntoView {
    let ScrollReveal { revealed, node_ref } = use_scroll_reveal();

    view! {
        <section class=css::vehicle node_ref=node_ref>
            <div class=css::layout>
                <div class=move || reveal_class(css::media, Motion::FromFarBelow, revealed.get())>
                    <div class=css::imageWrap>
                        <img class=css::image src=vehicle.image alt="Training" />
                    </div>
                    <div class=css::inset>
                        <img
                            class=move || reveal_class(css::insetImage, Motion::Zoom, revealed.get())
                            style:transition-delay="500ms"
                            src=vehicle.inset_image
                            alt="Nature"
                        />
                    </div>
                </div>

                <div
                    class=move || reveal_class(css::copy, Motion::FromRight, revealed.get())
                    style:transition-delay="300ms"
                >
                    <Eyebrow label=vehicle.eyebrow />
                    <SplitHeading heading=vehicle.heading heading_class=css::heading />
                    <p class=css::body>{vehicle.body}</p>
                    <p class=css::quote>{vehicle.quote}</p>
                    <button class=css::cta>
                        <span class=css::ctaLabel>{vehicle.cta_label}</span>
                        <span class=css::ctaIcon>
                            <Icon icon=ic::ARROW_RIGHT />
                        </span>
                    </button>
                </div>
            </div>
        </section>
    }
}
