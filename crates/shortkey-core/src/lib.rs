#![warn(missing_docs)]

//! Keyboard shortcut dispatcher: sequence matching, scoped dispatch, and
//! ambiguity scheduling.
//!
//! This is the one crate in the workspace with real engineering per its own
//! specification: a small state machine with non-obvious replay and
//! ordering rules, precedence across two independent axes (selector
//! specificity and target distance), and a cooperation contract with the
//! surrounding event-propagation model. `shortkey_stroke` and
//! `shortkey_selector` are its collaborators, consumed only through the
//! [`HostEvent`] and `shortkey_selector::Node` traits — this crate has zero
//! platform dependence of its own.

mod controller;
mod diagnostic;
mod dispatcher;
mod engine;
mod error;
mod event;
mod matcher;
mod registry;
mod replay;
mod types;

pub use controller::AMBIGUITY_WINDOW;
pub use diagnostic::{CapturingSink, DiagnosticSink, TracingSink};
pub use engine::Engine;
pub use error::{Error, Result};
pub use event::HostEvent;
pub use replay::{NullReplaySink, ReplaySink};
pub use types::{Binding, Handle, Handler, HandlerResult, NormalizedBinding};
