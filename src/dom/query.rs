//! Element queries: by id, class, tag; scoped and predicate variants.

use super::node::{ElementData, ElementId};
use super::tree::Dom;

impl Dom {
    /// Find the first element whose `id` field matches the given string.
    ///
    /// Iterates all elements in the arena, not just one subtree.
    pub fn query_by_id(&self, id: &str) -> Option<ElementId> {
        self.iter_elements()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(element_id, _)| element_id)
    }

    /// Find all elements that have the given CSS class.
    pub fn query_by_class(&self, class: &str) -> Vec<ElementId> {
        self.iter_elements()
            .filter(|(_, data)| data.has_class(class))
            .map(|(element_id, _)| element_id)
            .collect()
    }

    /// Find all elements with the given tag name.
    pub fn query_by_tag(&self, tag: &str) -> Vec<ElementId> {
        self.iter_elements()
            .filter(|(_, data)| data.tag == tag)
            .map(|(element_id, _)| element_id)
            .collect()
    }

    /// Find all elements matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&ElementData) -> bool) -> Vec<ElementId> {
        self.iter_elements()
            .filter(|(_, data)| predicate(data))
            .map(|(element_id, _)| element_id)
            .collect()
    }

    /// Find the first element beneath `root` (inclusive) with the given tag
    /// name, in document order.
    ///
    /// This is how the binding layer locates the filter input scoped to one
    /// instance root.
    pub fn query_tag_within(&self, root: ElementId, tag: &str) -> Option<ElementId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.get(id).is_some_and(|data| data.tag == tag))
    }

    /// Find all elements beneath `root` (inclusive) with the given CSS class,
    /// in document order.
    pub fn query_class_within(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|data| data.has_class(class)))
            .collect()
    }

    /// Iterate over all `(ElementId, &ElementData)` pairs in the arena.
    ///
    /// Slotmap insertion order: deterministic but not document order.
    fn iter_elements(&self) -> impl Iterator<Item = (ElementId, &ElementData)> {
        self.elements.iter()
    }
}
