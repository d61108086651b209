//! Custom hooks for page sections.
//!
//! Each hook owns its state for the lifetime of the calling component. Timers,
//! observers and listeners are held as [`Subscription`]s in local stored
//! values and released from `on_cleanup`, so unmounting a section always
//! tears them down.

use leptos::html;
use leptos::prelude::*;
use leptos_use::use_media_query;
use smflx_core::{Carousel, MenuState, RevealOutcome, RevealTrigger, ScrollState, Subscription};

use crate::config::{
    DESKTOP_MEDIA_QUERY, NAV_SCROLL_THRESHOLD_PX, REVEAL_FALLBACK, REVEAL_THRESHOLD,
};
use crate::utils::{dom, timer};

/// Keep `subscription` alive until the current owner is cleaned up.
fn hold_until_cleanup(subscription: Subscription) {
    let slot = StoredValue::new_local(subscription);
    on_cleanup(move || slot.dispose());
}

// ============================================================================
// Scroll Reveal
// ============================================================================

/// Entrance animation state for one section.
#[derive(Clone, Copy)]
pub struct ScrollReveal {
    /// Becomes `true` once, when the section first scrolls into view.
    pub revealed: Signal<bool>,
    /// Attach to the section element.
    pub node_ref: NodeRef<html::Section>,
}

/// Reveal a section the first time it is [`REVEAL_THRESHOLD`] visible.
///
/// Observation stops as soon as the section reveals. Without
/// `IntersectionObserver` the section settles per [`REVEAL_FALLBACK`].
pub fn use_scroll_reveal() -> ScrollReveal {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = RwSignal::new(false);
    let trigger = StoredValue::new(RevealTrigger::new(REVEAL_THRESHOLD));
    let observation = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let Some(section) = node_ref.get() else {
            return;
        };
        if !trigger.try_update_value(RevealTrigger::attach).unwrap_or(false) {
            return;
        }

        let on_ratio = move |ratio: f64| {
            let outcome = trigger
                .try_update_value(|t| t.observe(ratio))
                .unwrap_or(RevealOutcome::Ignored);
            if outcome == RevealOutcome::Triggered {
                revealed.set(true);
            }
            outcome != RevealOutcome::Pending
        };

        match dom::observe_intersection(&section, REVEAL_THRESHOLD, on_ratio) {
            Ok(subscription) => observation.set_value(Some(subscription)),
            Err(e) => {
                web_sys::console::warn_1(&format!("Scroll reveal disabled: {}", e).into());
                let shown = trigger
                    .try_update_value(|t| t.observation_unavailable(REVEAL_FALLBACK))
                    .unwrap_or(false);
                revealed.set(shown);
            }
        }
    });

    on_cleanup(move || {
        let _ = trigger.try_update_value(RevealTrigger::detach);
        observation.dispose();
    });

    ScrollReveal {
        revealed: revealed.into(),
        node_ref,
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// Rotate through `slides`, advancing every `period_ms`.
///
/// The index starts at 0 on every mount. An empty list never starts a timer.
pub fn use_carousel<S>(slides: Vec<S>, period_ms: u32) -> RwSignal<Carousel<S>>
where
    S: Send + Sync + 'static,
{
    let carousel = RwSignal::new(Carousel::new(slides));

    if !carousel.with_untracked(Carousel::is_empty) {
        hold_until_cleanup(timer::every(period_ms, move || {
            carousel.update(|c| {
                c.advance();
            });
        }));
    }

    carousel
}

// ============================================================================
// Navbar
// ============================================================================

/// Navbar toggles: compact-on-scroll and the mobile overlay menu.
#[derive(Clone, Copy)]
pub struct NavbarState {
    /// `true` while scrolled past [`NAV_SCROLL_THRESHOLD_PX`].
    pub scrolled: Signal<bool>,
    /// Overlay menu state.
    pub menu: RwSignal<MenuState>,
}

impl NavbarState {
    pub fn is_menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    /// Menu control clicked.
    pub fn toggle_menu(&self) {
        self.menu.update(|m| *m = m.toggled());
    }

    /// A link or action inside the overlay was activated.
    pub fn navigated(&self) {
        self.menu.update(|m| *m = m.navigated());
    }
}

/// Track window scroll and own the overlay menu state.
///
/// The overlay closes when the viewport reaches the desktop breakpoint,
/// where inline links take over.
pub fn use_navbar() -> NavbarState {
    let scroll = RwSignal::new(ScrollState::new(NAV_SCROLL_THRESHOLD_PX));
    let menu = RwSignal::new(MenuState::default());

    scroll.maybe_update(|s| s.update(dom::scroll_y()));
    match dom::on_window_scroll(move |y| {
        scroll.maybe_update(|s| s.update(y));
    }) {
        Some(listener) => hold_until_cleanup(listener),
        None => web_sys::console::warn_1(&"Navbar scroll tracking unavailable".into()),
    }

    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move |_| {
        if is_desktop.get() && menu.get_untracked().is_open() {
            menu.set(MenuState::Closed);
        }
    });

    NavbarState {
        scrolled: Signal::derive(move || scroll.with(ScrollState::is_scrolled)),
        menu,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::Executor;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_held_subscription_released_on_cleanup() {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let owner = Owner::new();
        owner.with(|| {
            hold_until_cleanup(timer::every(10, move || counter.set(counter.get() + 1)));
        });

        TimeoutFuture::new(45).await;
        let seen = ticks.get();
        assert!(seen >= 1);

        owner.cleanup();
        TimeoutFuture::new(60).await;
        assert_eq!(ticks.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn test_carousel_advances_until_cleanup() {
        let owner = Owner::new();
        let carousel = owner.with(|| use_carousel(vec!["single", "married", "family"], 10));
        assert_eq!(carousel.with_untracked(Carousel::active_index), Some(0));

        TimeoutFuture::new(45).await;
        assert_ne!(carousel.with_untracked(Carousel::active_index), Some(0));

        owner.cleanup();
        assert!(carousel.try_with_untracked(Carousel::active_index).is_none());
        TimeoutFuture::new(60).await;
        assert!(carousel.try_with_untracked(Carousel::active_index).is_none());
    }

    #[wasm_bindgen_test]
    async fn test_empty_carousel_never_ticks() {
        let owner = Owner::new();
        let carousel = owner.with(|| use_carousel(Vec::<&str>::new(), 10));

        TimeoutFuture::new(45).await;
        assert_eq!(carousel.with_untracked(Carousel::active_index), None);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_section_reveals_once_on_screen() {
        let _ = Executor::init_wasm_bindgen();
        let document = document();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let slot = Rc::new(Cell::new(None::<Signal<bool>>));
        let seen = slot.clone();
        let handle = mount_to(host.clone().unchecked_into(), move || {
            let ScrollReveal { revealed, node_ref } = use_scroll_reveal();
            seen.set(Some(revealed));
            view! { <section node_ref=node_ref style="height: 100px">"Genesis"</section> }
        });

        let revealed = slot.get().unwrap();
        TimeoutFuture::new(150).await;
        assert!(revealed.get_untracked());

        // Leaving the viewport after the reveal does not hide the section
        host.set_attribute("style", "position: absolute; top: -10000px").unwrap();
        TimeoutFuture::new(100).await;
        assert!(revealed.get_untracked());

        drop(handle);
    }
}
