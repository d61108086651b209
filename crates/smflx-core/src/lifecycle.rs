//! Scoped subscriptions for timers and observers.
//!
//! A [`Subscription`] is owned by the section that acquired a resource
//! (interval timer, intersection observer, event listener). Callbacks never
//! hold the subscription itself; they hold a [`Liveness`] and route every
//! state write through [`Liveness::run`]. Once the owner cancels (explicitly
//! or by dropping), every later callback becomes a no-op, even one already
//! queued by the browser.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared flag telling callbacks whether their subscription is still active.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    /// Create a live flag, to be bound to a [`Subscription`].
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    /// Run `f` only while the subscription is active.
    ///
    /// Returns `None` without calling `f` after cancellation.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_live() { Some(f()) } else { None }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Liveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Liveness").field(&self.is_live()).finish()
    }
}

/// Owner handle for an acquired resource.
///
/// Cancellation is idempotent: the release routine runs at most once, and
/// dropping an already-cancelled subscription does nothing.
pub struct Subscription {
    liveness: Liveness,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Bind `release` to `liveness`.
    ///
    /// The flag is normally created first and handed to the callback before
    /// the underlying resource exists.
    pub fn new(liveness: Liveness, release: impl FnOnce() + 'static) -> Self {
        Self {
            liveness,
            release: Some(Box::new(release)),
        }
    }

    /// A flag for a new callback sharing this subscription's lifetime.
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn is_active(&self) -> bool {
        self.liveness.is_live()
    }

    /// Stop delivering callbacks and release the resource.
    pub fn cancel(&mut self) {
        self.liveness.0.set(false);
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .field("released", &self.release.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_release() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_new_subscription_is_active() {
        let sub = Subscription::new(Liveness::new(), || {});
        assert!(sub.is_active());
        assert!(sub.liveness().is_live());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (count, release) = counting_release();
        let mut sub = Subscription::new(Liveness::new(), release);

        sub.cancel();
        sub.cancel();
        drop(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (count, release) = counting_release();
        let live = Liveness::new();
        {
            let _sub = Subscription::new(live.clone(), release);
        }
        assert_eq!(count.get(), 1);
        assert!(!live.is_live());
    }

    #[test]
    fn test_run_after_cancel_is_noop() {
        let mut sub = Subscription::new(Liveness::new(), || {});
        let live = sub.liveness();
        let hits = Cell::new(0);

        assert_eq!(live.run(|| hits.set(hits.get() + 1)), Some(()));
        sub.cancel();
        assert_eq!(live.run(|| hits.set(hits.get() + 1)), None);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_debug_format() {
        let mut sub = Subscription::new(Liveness::new(), || {});
        sub.cancel();
        let debug = format!("{:?}", sub);
        assert!(debug.contains("active: false"));
        assert!(debug.contains("released: true"));
    }
}
