//! TableInstance: one filter input plus the tag buttons scoped to it.

use crate::dom::ElementId;
use crate::sync;

use super::button::TagButton;
use super::input::FilterInput;

/// One scoped grouping of a filter input and its associated toggle buttons.
///
/// Multiple independent instances may coexist on one page; each owns its own
/// input value and button states and never reaches into another instance.
/// The instance also remembers the page elements it was bound from so state
/// can be projected back onto them.
#[derive(Debug, Clone)]
pub struct TableInstance {
    root: ElementId,
    input_element: ElementId,
    input: FilterInput,
    buttons: Vec<TagButton>,
}

impl TableInstance {
    /// Create a new instance with an empty input and no buttons.
    pub fn new(root: ElementId, input_element: ElementId) -> Self {
        Self {
            root,
            input_element,
            input: FilterInput::new(),
            buttons: Vec::new(),
        }
    }

    /// Add a tag button (builder pattern).
    pub fn with_button(mut self, button: TagButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// The wrapper element this instance was bound from.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The page element backing the filter input.
    pub fn input_element(&self) -> ElementId {
        self.input_element
    }

    /// Immutable access to the filter input.
    pub fn input(&self) -> &FilterInput {
        &self.input
    }

    /// Mutable access to the filter input.
    pub fn input_mut(&mut self) -> &mut FilterInput {
        &mut self.input
    }

    /// The tag buttons scoped to this instance.
    pub fn buttons(&self) -> &[TagButton] {
        &self.buttons
    }

    /// Find the index of the button backed by the given page element.
    pub fn button_by_element(&self, element: ElementId) -> Option<usize> {
        self.buttons.iter().position(|b| b.element() == element)
    }

    /// Find the index of the first button with the given label.
    pub fn button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Run the applier for one button: toggle its label token in the input
    /// value. Does not touch the button's selection state; that is the
    /// reconciler's job once it observes the change notification.
    ///
    /// # Panics
    ///
    /// Panics if `button_idx` is out of range.
    pub fn press(&mut self, button_idx: usize) {
        sync::apply(&self.buttons[button_idx], &mut self.input);
    }

    /// Run the reconciler: derive every button's selection from the current
    /// input value. Returns the indices of buttons that actually flipped.
    pub fn reconcile(&mut self) -> Vec<usize> {
        sync::reconcile(&self.input, &mut self.buttons)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
