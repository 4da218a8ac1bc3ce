//! Reconciler: derive tag-button selection from the input value.

use crate::model::{FilterInput, Selection, TagButton};

/// Recompute every button's selection from the current input value.
///
/// A button is Selected iff its label is a case-sensitive literal substring
/// of the value. Only buttons whose state is wrong are touched, so repeated
/// runs with no intervening value change are no-ops; the indices of buttons
/// that actually flipped are returned so callers can re-project just those.
///
/// Never mutates the input value.
pub fn reconcile(input: &FilterInput, buttons: &mut [TagButton]) -> Vec<usize> {
    let value = input.value();
    let mut flipped = Vec::new();
    for (idx, button) in buttons.iter_mut().enumerate() {
        let wanted = if value.contains(button.label()) {
            Selection::Selected
        } else {
            Selection::Unselected
        };
        if button.selection() != wanted {
            button.set_selection(wanted);
            flipped.push(idx);
        }
    }
    flipped
}

// ===========================================================================
// Tests
// ===========================================================================
