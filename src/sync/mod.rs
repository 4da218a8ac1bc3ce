//! The two core operations: applier and reconciler.
//!
//! The applier ([`apply`]) turns a button activation into an input-value
//! edit; the reconciler ([`reconcile`]) derives every button's selection
//! from the current value. They are mutually triggering but never recursive:
//! the applier does not read other buttons' state and the reconciler does
//! not write the value, so there is no feedback loop.

pub mod applier;
pub mod reconciler;

pub use applier::apply;
pub use reconciler::reconcile;
