#![forbid(unsafe_code)]

//! UI glue: the thin layer between observable state and a host UI toolkit.
//!
//! # Role in Trellis
//! `trellis-ui` carries the single-purpose adapters a presentation layer
//! needs around `trellis-state`: an action-invocation abstraction with an
//! enablement predicate, keyboard-shortcut binding onto menu models with
//! human-readable gesture labels, a named-resource registry, and a typed
//! value-extraction adapter for declarative bindings.
//!
//! None of this owns an event loop or a terminal. The host polls input,
//! forwards key events to [`Menu::dispatch`], and pushes enablement
//! requery rounds through [`RequeryHub`] when its world changes.

pub mod command;
pub mod extract;
pub mod keys;
pub mod resources;
pub mod shortcut;

#[cfg(test)]
mod property_tests;

pub use command::{Command, RequeryHub};
pub use extract::{IntValueExtractor, StringValueExtractor, ValueExtractor};
pub use keys::{Key, Modifiers};
pub use resources::ResourceRegistry;
pub use shortcut::{Menu, MenuItem, ShortcutError, gesture_label};
