//! Interval timers bound to a [`Subscription`].

use gloo_timers::callback::Interval;
use smflx_core::{Liveness, Subscription};

/// Run `tick` every `period_ms` milliseconds until the subscription ends.
///
/// Cancelling clears the browser interval; a tick already queued when
/// cancellation happens is swallowed by the liveness check.
pub fn every(period_ms: u32, mut tick: impl FnMut() + 'static) -> Subscription {
    let liveness = Liveness::new();
    let live = liveness.clone();
    let interval = Interval::new(period_ms, move || {
        live.run(&mut tick);
    });

    // Dropping an Interval clears it
    Subscription::new(liveness, move || drop(interval))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_no_ticks_after_cancel() {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let mut sub = every(10, move || counter.set(counter.get() + 1));

        TimeoutFuture::new(35).await;
        sub.cancel();
        let seen = ticks.get();
        assert!(seen >= 1);

        TimeoutFuture::new(50).await;
        assert_eq!(ticks.get(), seen);
    }
}
