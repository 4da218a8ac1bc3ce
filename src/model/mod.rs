//! Authoritative in-memory state: input, buttons, instances, page.
//!
//! The model is the single source of truth for the filter value and every
//! button's selection; the rendered page only mirrors it. Nothing in the
//! crate derives state by reading classes back out of elements.

pub mod button;
pub mod input;
pub mod instance;
pub mod page;

pub use button::{Selection, TagButton};
pub use input::FilterInput;
pub use instance::TableInstance;
pub use page::Page;
