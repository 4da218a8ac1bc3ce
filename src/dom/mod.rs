//! Element arena: slotmap-backed page tree with class/id/tag queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{ElementId, ElementData};
pub use tree::Dom;
