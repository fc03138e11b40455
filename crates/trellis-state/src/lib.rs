#![forbid(unsafe_code)]

//! State layer: observable keyed state for incremental UI updates.
//!
//! # Role in Trellis
//! `trellis-state` owns the data side of the binding story. Its centerpiece
//! is [`ObservedMap`], a key-unique mapping that announces every structural
//! change (insert, remove, replace, bulk reset) to registered observers with
//! enough detail that a presentation layer can patch itself incrementally
//! instead of redrawing from scratch.
//!
//! # Primary responsibilities
//! - **ObservedMap**: the observable container and its `reconcile` diff.
//! - **MapChange**: the structured notification record per mutation.
//! - **Subscription**: RAII observer registration guard.
//! - **KeyedSource**: the capability seam for "anything map-shaped" that
//!   `reconcile` and the binding adapters read through.
//!
//! # How it fits in the system
//! The UI glue crate (`trellis-ui`) consumes notifications and reads values
//! through [`KeyedSource`]; nothing in this crate touches a terminal or an
//! event loop.

pub mod change;
pub mod error;
pub mod map;
pub mod source;
pub mod subscription;

pub use change::{ChangeKind, MapChange};
pub use error::MapError;
pub use map::{MapIter, ObservedMap};
pub use source::KeyedSource;
pub use subscription::Subscription;
