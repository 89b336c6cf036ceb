#![warn(missing_docs)]

//! Reference event-delivery host.
//!
//! This is the collaborator `shortkey-core` calls "the event-delivery
//! host": an in-memory document tree ([`NodeHandle`]), a fake key-event
//! type ([`KeyEvent`]) implementing the host event contract, and a
//! [`Harness`] that feeds events to an engine and records what happened —
//! the thing the demo binary and the integration tests drive.

mod document;
mod harness;
mod key_event;

pub use document::NodeHandle;
pub use harness::Harness;
pub use key_event::{KeyEvent, Modifiers};
