//! Fixed "scroll" cue in the bottom-right corner, hidden on small screens.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/scroll_indicator/scroll_indicator.module.css");

#[component]
pub fn ScrollIndicator() -> impl IntoView {
    view! {
        <div class=css::indicator aria-hidden="true">
            <span class=css::label>"Scroll"</span>
            <div class=css::track>
                <div class=css::thumb></div>
            </div>
        </div>
    }
}
