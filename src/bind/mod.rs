//! Binding layer: readiness gating, instance discovery, wiring.

pub mod binder;
pub mod ready;

pub use binder::{bind, BindError, BindOptions, Binder};
pub use ready::ReadyGate;
