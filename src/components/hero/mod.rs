//! Full-screen hero carousel.
//!
//! All slides are stacked; the active one is opaque and interactive, the
//! rest are transparent and inert. The active index rotates on a fixed
//! period for as long as the hero is mounted.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::{HeroContent, Slide};
use smflx_core::motion::title_words;

use crate::components::hooks::use_carousel;
use crate::components::icons as ic;
use crate::config::CAROUSEL_PERIOD_MS;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let HeroContent { cta_label, slides } = hero;
    let carousel = use_carousel(slides.clone(), CAROUSEL_PERIOD_MS);

    view! {
        <section class=css::hero>
            <div class=css::frame>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        let active = Signal::derive(move || carousel.with(|c| c.is_active(index)));
                        view! { <HeroSlide slide=slide active=active cta_label=cta_label.clone() /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HeroSlide(slide: Slide, active: Signal<bool>, cta_label: String) -> impl IntoView {
    let Slide {
        title,
        description,
        image,
    } = slide;
    let words = title_words(&title)
        .into_iter()
        .map(|word| {
            let class = if word.emphasized { css::emphasis } else { css::word };
            view! { <span class=class>{word.text.to_string()}</span> }
        })
        .collect_view();

    view! {
        <div
            class=move || stylance::classes!(css::slide, active.get().then_some(css::active))
            aria-hidden=move || (!active.get()).to_string()
        >
            <img class=css::image src=image alt=title />
            <div class=css::overlay>
                <div class=css::content>
                    <div class=css::copy>
                        <h2 class=css::title>{words}</h2>
                        <div class=css::row>
                            <button class=css::cta>
                                <span class=css::ctaLabel>{cta_label}</span>
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                            <p class=css::description>{description}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
