#![forbid(unsafe_code)]

//! RAII guard for observer registrations.

/// RAII guard for a registered observer callback.
///
/// The observing side stores callbacks as `Weak` references; the
/// `Subscription` holds the only strong reference. Dropping the guard makes
/// the callback unreachable, so the observed object's next notification
/// cycle fails to upgrade the `Weak` and prunes the entry.
///
/// The guard is type-erased (`Box<dyn Any>`) so one subscription type can
/// serve observers of any callback signature — `Rc<dyn Fn(&T)>` cannot
/// coerce to `Rc<dyn Any>` directly, but boxing the `Rc` itself can.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    /// Wrap a strong callback reference in a guard.
    ///
    /// Intended for observable types in this workspace; callers hold the
    /// returned guard for as long as they want the callback delivered.
    #[must_use]
    pub fn holding(guard: Box<dyn std::any::Any>) -> Self {
        Self { _guard: guard }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
