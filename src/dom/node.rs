//! Element types: ElementId, ElementData.

use std::collections::HashMap;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a page element. Copy, lightweight (u64).
    pub struct ElementId;
}

/// Data associated with a single page element.
///
/// Elements model externally-rendered markup: a tag name, optional unique id,
/// CSS classes, text content, and string attributes. The crate treats this
/// structure as a read-only contract except for the class and attribute
/// mutations performed by the projection step.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (e.g. "div", "input", "button").
    pub tag: String,
    /// Optional unique id.
    pub id: Option<String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Text content (a tag button's label lives here).
    pub text: String,
    /// String attributes (placeholder, aria-label, value, ...).
    pub attrs: HashMap<String, String>,
}

impl ElementData {
    /// Create a new `ElementData` with the given tag name and no other data.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            attrs: HashMap::new(),
        }
    }

    /// Set the unique id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set a string attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Check whether this element has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace `from` with `to` in the class list.
    ///
    /// Removes every occurrence of `from` and ensures `to` is present. Used by
    /// the projection step to swap mutually exclusive style markers.
    pub fn swap_class(&mut self, from: &str, to: &str) {
        self.remove_class(from);
        self.add_class(to);
    }

    /// Get an attribute value, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = ElementData::new("button");
        assert_eq!(data.tag, "button");
        assert!(data.id.is_none());
        assert!(data.classes.is_empty());
        assert!(data.text.is_empty());
        assert!(data.attrs.is_empty());
    }

    #[test]
    fn builder_with_id() {
        let data = ElementData::new("input").with_id("search");
        assert_eq!(data.id.as_deref(), Some("search"));
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = ElementData::new("div").with_class("wrap").with_class("wrap");
        assert_eq!(data.classes, vec!["wrap"]);
    }

    #[test]
    fn builder_with_text() {
        let data = ElementData::new("button").with_text("rust");
        assert_eq!(data.text, "rust");
    }

    #[test]
    fn builder_with_attr() {
        let data = ElementData::new("input").with_attr("placeholder", "Search...");
        assert_eq!(data.attr("placeholder"), Some("Search..."));
    }

    #[test]
    fn has_class() {
        let data = ElementData::new("button").with_class("tag-btn");
        assert!(data.has_class("tag-btn"));
        assert!(!data.has_class("tag-selected"));
    }

    #[test]
    fn add_class_idempotent() {
        let mut data = ElementData::new("button");
        data.add_class("tag-selected");
        data.add_class("tag-selected");
        assert_eq!(data.classes.len(), 1);
    }

    #[test]
    fn remove_class_noop_when_absent() {
        let mut data = ElementData::new("button");
        data.remove_class("nonexistent");
        assert!(data.classes.is_empty());
    }

    #[test]
    fn swap_class() {
        let mut data = ElementData::new("button").with_class("tag-unselected");
        data.swap_class("tag-unselected", "tag-selected");
        assert!(data.has_class("tag-selected"));
        assert!(!data.has_class("tag-unselected"));
    }

    #[test]
    fn swap_class_already_swapped() {
        let mut data = ElementData::new("button").with_class("tag-selected");
        data.swap_class("tag-unselected", "tag-selected");
        assert_eq!(data.classes, vec!["tag-selected"]);
    }

    #[test]
    fn set_attr_replaces() {
        let mut data = ElementData::new("input");
        data.set_attr("value", "a");
        data.set_attr("value", "b");
        assert_eq!(data.attr("value"), Some("b"));
    }

    #[test]
    fn element_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<ElementId>();
    }
}
