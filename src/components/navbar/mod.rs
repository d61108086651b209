//! Floating navigation bar.
//!
//! Shrinks slightly once the page scrolls past the threshold. Below the
//! desktop breakpoint the inline links are replaced by a menu button that
//! mounts an overlay panel; activating any overlay entry unmounts it again.

use leptos::prelude::*;
use leptos_icons::Icon;
use smflx_core::content::{Brand, NavContent, NavLink};

use crate::components::hooks::{NavbarState, use_navbar};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar(brand: Brand, nav: NavContent) -> impl IntoView {
    let state = use_navbar();
    let NavContent {
        links,
        contact_label,
    } = nav;
    let inline_links = links.clone();
    let overlay_contact = contact_label.clone();

    view! {
        <nav class=move || {
            stylance::classes!(css::navbar, state.scrolled.get().then_some(css::compact))
        }>
            <div class=css::inner>
                <div class=css::bar>
                    <img class=css::logo src=brand.logo alt=format!("{} Logo", brand.name) />

                    <div class=css::links>
                        {inline_links
                            .into_iter()
                            .map(|link| view! { <a class=css::link href=link.href>{link.label}</a> })
                            .collect_view()}
                    </div>

                    <div class=css::actions>
                        <button class=css::contact>
                            <span>{contact_label}</span>
                        </button>
                    </div>

                    <button
                        class=css::menuToggle
                        aria-label="Toggle menu"
                        aria-expanded=move || state.is_menu_open().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        {move || {
                            if state.is_menu_open() {
                                view! { <Icon icon=ic::CLOSE /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::MENU /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                <Show when=move || state.is_menu_open()>
                    <OverlayMenu
                        state=state
                        links=links.clone()
                        contact_label=overlay_contact.clone()
                    />
                </Show>
            </div>
        </nav>
    }
}

/// Mobile navigation panel, mounted only while the menu is open.
#[component]
fn OverlayMenu(state: NavbarState, links: Vec<NavLink>, contact_label: String) -> impl IntoView {
    view! {
        <div class=css::overlay>
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            class=css::overlayLink
                            href=link.href
                            on:click=move |_| state.navigated()
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
            <button class=css::overlayContact on:click=move |_| state.navigated()>
                {contact_label}
            </button>
        </div>
    }
}
