//! Root application module.
//!
//! Parses the bundled page content once and composes the landing page from
//! it. Content errors surface through the error boundary instead of a
//! half-rendered page.

use leptos::prelude::*;
use smflx_core::PageContent;

use crate::components::about::About;
use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::ministries::Ministries;
use crate::components::navbar::Navbar;
use crate::components::resources::Resources;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::vehicle::Vehicle;
use crate::config::PAGE_CONTENT;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let page = PageContent::from_toml(PAGE_CONTENT);
    if let Err(e) = &page {
        web_sys::console::error_1(&format!("Failed to load page content: {}", e).into());
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::failure>
                    <div class=css::failureBody>
                        <h1 class=css::failureTitle>"Something went wrong"</h1>
                        <p class=css::failureHint>
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <details class=css::failureDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reload
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {page.map(|content| view! { <Landing content=content /> })}
        </ErrorBoundary>
    }
}

/// The full page, top to bottom.
#[component]
fn Landing(content: PageContent) -> impl IntoView {
    let PageContent {
        brand,
        nav,
        hero,
        about,
        vehicle,
        ministries,
        cta,
        resources,
        footer,
    } = content;

    view! {
        <div class=css::page>
            <Navbar brand=brand.clone() nav=nav />
            <main>
                <Hero hero=hero />
                <About about=about />
                <Vehicle vehicle=vehicle />
                <Ministries ministries=ministries />
                <Cta cta=cta />
                <Resources resources=resources />
            </main>
            <Footer brand=brand footer=footer />
            <ScrollIndicator />
        </div>
    }
}
