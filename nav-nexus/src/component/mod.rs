//! Component module.
//!
//! Defines the `Screen` trait and the events and actions it deals in.

pub mod traits;

pub use traits::{Action, BoxedScreen, Event, Screen};
