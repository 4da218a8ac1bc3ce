//! Applier: translate a button activation into an input-value edit.

use crate::model::{FilterInput, Selection, TagButton};

/// Toggle a button's label token in the filter input value.
///
/// - Unselected button: append the label surrounded by single spaces.
/// - Selected button: remove every literal occurrence of the label.
///
/// In both directions, runs of two or more spaces are collapsed to one
/// afterwards, so the value never accumulates doubled spaces. The label is
/// matched as a literal substring; characters that would carry meaning in a
/// pattern language (punctuation, brackets) are ordinary text here.
///
/// The applier never changes the button's selection state. The caller is
/// expected to emit a change notification after every call, whether or not
/// the value text actually differs from before.
pub fn apply(button: &TagButton, input: &mut FilterInput) {
    let value = match button.selection() {
        Selection::Unselected => {
            let mut value = input.value().to_owned();
            value.push(' ');
            value.push_str(button.label());
            value.push(' ');
            value
        }
        Selection::Selected => input.value().replace(button.label(), ""),
    };
    input.set_value(collapse_spaces(&value));
}

/// Collapse every run of two or more spaces into a single space.
pub(crate) fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            prev_space = false;
            out.push(ch);
        }
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================
