//! TagButton: one clickable tag with a derived two-state selection.

use crate::dom::ElementId;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The two-state selection of a tag button.
///
/// Selection is derived state: it is always recomputed from the owning
/// instance's input value by the reconciler, never set independently by a
/// user action on the button itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The button's label is not present in the input value.
    #[default]
    Unselected,
    /// The button's label is a substring of the input value.
    Selected,
}

// ---------------------------------------------------------------------------
// TagButton
// ---------------------------------------------------------------------------

/// A clickable element representing one filterable tag.
///
/// The label is immutable for the lifetime of the button; only the selection
/// state changes. The button remembers which page element it projects onto.
#[derive(Debug, Clone)]
pub struct TagButton {
    label: String,
    selection: Selection,
    element: ElementId,
}

impl TagButton {
    /// Create a new unselected button for the given label and page element.
    pub fn new(label: impl Into<String>, element: ElementId) -> Self {
        Self {
            label: label.into(),
            selection: Selection::Unselected,
            element,
        }
    }

    /// Set the initial selection (builder pattern).
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Return the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the button is currently selected.
    pub fn is_selected(&self) -> bool {
        self.selection == Selection::Selected
    }

    /// The page element this button projects onto.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Overwrite the selection state. Reconciler use only.
    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_element(sm: &mut SlotMap<ElementId, ()>) -> ElementId {
        sm.insert(())
    }

    #[test]
    fn new_button_is_unselected() {
        let mut sm = SlotMap::with_key();
        let el = make_element(&mut sm);
        let b = TagButton::new("rust", el);
        assert_eq!(b.label(), "rust");
        assert_eq!(b.selection(), Selection::Unselected);
        assert!(!b.is_selected());
        assert_eq!(b.element(), el);
    }

    #[test]
    fn with_selection_builder() {
        let mut sm = SlotMap::with_key();
        let el = make_element(&mut sm);
        let b = TagButton::new("rust", el).with_selection(Selection::Selected);
        assert!(b.is_selected());
    }

    #[test]
    fn set_selection_flips_state() {
        let mut sm = SlotMap::with_key();
        let el = make_element(&mut sm);
        let mut b = TagButton::new("rust", el);
        b.set_selection(Selection::Selected);
        assert!(b.is_selected());
        b.set_selection(Selection::Unselected);
        assert!(!b.is_selected());
    }

    #[test]
    fn selection_default_is_unselected() {
        assert_eq!(Selection::default(), Selection::Unselected);
    }
}
