#![forbid(unsafe_code)]

//! Action-invocation abstraction with enablement tracking.
//!
//! # Design
//!
//! A [`Command<P>`] relays its functionality to other objects by invoking
//! delegates: a required executor and an optional enablement predicate
//! (absent means "can always execute"). The executor is a non-optional
//! constructor argument, so the "command without execution logic" error
//! class cannot arise at runtime.
//!
//! Enablement re-evaluation is not an ambient process-wide signal here.
//! Hosts own an explicit [`RequeryHub`] and push requery rounds into it;
//! every attached command then re-announces its enablement, and widgets
//! holding [`on_enablement_changed`](Command::on_enablement_changed)
//! subscriptions re-query [`can_execute`](Command::can_execute).
//!
//! # Invariants
//!
//! 1. `can_execute` with no predicate returns `true` for every parameter.
//! 2. `execute` does not itself check the predicate; hosts gate the call.
//! 3. Enablement listeners fire in registration order, synchronously.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use trellis_state::Subscription;

type ListenerRc = Rc<dyn Fn()>;
type ListenerWeak = Weak<dyn Fn()>;

/// Multicast zero-argument notification list, shared between commands and
/// the requery hub. Listeners are weak; guards keep them alive.
#[derive(Clone, Default)]
struct Signal {
    listeners: Rc<RefCell<Vec<ListenerWeak>>>,
}

impl Signal {
    fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(listener);
        self.listeners.borrow_mut().push(Rc::downgrade(&strong));
        Subscription::holding(Box::new(strong))
    }

    fn emit(&self) {
        // Snapshot live listeners before calling any of them, pruning dead
        // entries along the way.
        let live: Vec<ListenerRc> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|w| w.strong_count() > 0);
            listeners.iter().filter_map(|w| w.upgrade()).collect()
        };
        for listener in &live {
            listener();
        }
    }
}

/// A command that relays execution to a delegate, with optional enablement.
pub struct Command<P = ()> {
    execute: Box<dyn Fn(&P)>,
    can_execute: Option<Box<dyn Fn(&P) -> bool>>,
    enablement: Signal,
}

impl<P> Command<P> {
    /// A command that can always execute.
    #[must_use]
    pub fn new(execute: impl Fn(&P) + 'static) -> Self {
        Self {
            execute: Box::new(execute),
            can_execute: None,
            enablement: Signal::default(),
        }
    }

    /// A command gated by an enablement predicate.
    #[must_use]
    pub fn with_predicate(
        execute: impl Fn(&P) + 'static,
        can_execute: impl Fn(&P) -> bool + 'static,
    ) -> Self {
        Self {
            execute: Box::new(execute),
            can_execute: Some(Box::new(can_execute)),
            enablement: Signal::default(),
        }
    }

    /// Invoke the executor.
    pub fn execute(&self, parameter: &P) {
        (self.execute)(parameter);
    }

    /// Whether the command may execute for `parameter`. `true` when no
    /// predicate was supplied.
    #[must_use]
    pub fn can_execute(&self, parameter: &P) -> bool {
        self.can_execute.as_ref().is_none_or(|p| p(parameter))
    }

    /// Register a listener for enablement changes. The listener should
    /// re-query [`can_execute`](Self::can_execute) and update widget state.
    pub fn on_enablement_changed(&self, listener: impl Fn() + 'static) -> Subscription {
        self.enablement.subscribe(listener)
    }

    /// Announce that enablement may have changed.
    pub fn notify_enablement_changed(&self) {
        self.enablement.emit();
    }
}

impl<P> std::fmt::Debug for Command<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("has_predicate", &self.can_execute.is_some())
            .finish_non_exhaustive()
    }
}

/// Explicit broadcast channel for enablement requery rounds.
///
/// Replaces a hidden global: the host UI layer creates one hub, attaches
/// the commands it owns, and calls [`request_requery`](Self::request_requery)
/// whenever something that could affect enablement happens (focus change,
/// selection change, model mutation).
#[derive(Default)]
pub struct RequeryHub {
    signal: Signal,
}

impl RequeryHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw listener for requery rounds.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.signal.subscribe(listener)
    }

    /// Attach a command: every requery round makes the command re-announce
    /// its enablement to its own listeners. Hold the returned guard for as
    /// long as the command should stay attached.
    pub fn attach<P>(&self, command: &Command<P>) -> Subscription {
        let enablement = command.enablement.clone();
        self.signal.subscribe(move || enablement.emit())
    }

    /// Broadcast one requery round to all attached commands and listeners.
    pub fn request_requery(&self) {
        self.signal.emit();
    }
}

impl std::fmt::Debug for RequeryHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequeryHub").finish_non_exhaustive()
    }
}
