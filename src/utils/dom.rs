//! DOM and Web API utility functions.
//!
//! Window lookups plus the two browser event sources the page reacts to:
//! viewport intersection and window scroll. Each registration is returned as
//! a [`Subscription`]; dropping or cancelling it detaches the browser resource.

use std::fmt;

use smflx_core::{Liveness, Subscription, Threshold};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Failure to start observing viewport intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveError {
    /// Browser window not available
    NoWindow,
    /// `IntersectionObserver` is not implemented by this environment
    Unsupported,
    /// The observer constructor threw
    ConstructionFailed,
}

impl fmt::Display for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::Unsupported => write!(f, "IntersectionObserver not supported"),
            Self::ConstructionFailed => write!(f, "Failed to create IntersectionObserver"),
        }
    }
}

impl std::error::Error for ObserveError {}

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Check whether `IntersectionObserver` exists on the window.
pub fn supports_intersection_observer() -> bool {
    window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Observe how much of `element` is visible.
///
/// `on_ratio` receives the visible fraction (0 when not intersecting) each
/// time it crosses `threshold`. Returning `true` disconnects the observer
/// from inside the callback; remaining entries in that batch are dropped.
pub fn observe_intersection(
    element: &Element,
    threshold: Threshold,
    mut on_ratio: impl FnMut(f64) -> bool + 'static,
) -> Result<Subscription, ObserveError> {
    window().ok_or(ObserveError::NoWindow)?;
    if !supports_intersection_observer() {
        return Err(ObserveError::Unsupported);
    }

    let liveness = Liveness::new();
    let live = liveness.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if live.run(|| on_ratio(ratio)) == Some(true) {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold.get()));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| ObserveError::ConstructionFailed)?;
    observer.observe(element);

    Ok(Subscription::new(liveness, move || {
        observer.disconnect();
        // The closure must outlive the observer
        drop(callback);
    }))
}

/// Call `on_scroll` with the vertical offset on every window scroll.
///
/// The listener is registered as passive.
pub fn on_window_scroll(on_scroll: impl Fn(f64) + 'static) -> Option<Subscription> {
    let window = window()?;
    let liveness = Liveness::new();
    let live = liveness.clone();
    let closure = Closure::<dyn Fn()>::new(move || {
        live.run(|| on_scroll(scroll_y()));
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

    Some(Subscription::new(liveness, move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }))
}
