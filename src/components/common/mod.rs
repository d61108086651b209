//! Small building blocks shared by several sections.

use leptos::prelude::*;
use smflx_core::content::Heading;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

/// Rule plus uppercase label shown above section headings.
#[component]
pub fn Eyebrow(label: String) -> impl IntoView {
    view! {
        <div class=css::eyebrow>
            <div class=css::rule></div>
            <span class=css::label>{label}</span>
        </div>
    }
}

/// Heading with its emphasized tail on a new line.
#[component]
pub fn SplitHeading(heading: Heading, heading_class: &'static str) -> impl IntoView {
    view! {
        <h2 class=heading_class>
            {heading.lead}
            <br />
            <span class=css::emphasis>{heading.emphasis}</span>
        </h2>
    }
}
