//! Projection: write model state onto page elements.
//!
//! The model is authoritative; the two style-marker classes on a button
//! element are presentation only. This module is the single place that
//! mutates them, so selection state never has to be read back out of the
//! rendered page.

use crate::dom::Dom;
use crate::model::TableInstance;

/// Style marker carried by selected tag buttons.
pub const SELECTED_CLASS: &str = "tag-selected";

/// Style marker carried by unselected tag buttons.
pub const UNSELECTED_CLASS: &str = "tag-unselected";

/// Attribute on the input element mirroring the model value.
pub const VALUE_ATTR: &str = "value";

/// Project one button's selection onto its page element.
///
/// The two marker classes are kept mutually exclusive. Idempotent: running
/// it again with unchanged state leaves the element as it is.
pub fn project_button(instance: &TableInstance, button_idx: usize, dom: &mut Dom) {
    let button = &instance.buttons()[button_idx];
    let Some(element) = dom.get_mut(button.element()) else {
        return;
    };
    if button.is_selected() {
        element.swap_class(UNSELECTED_CLASS, SELECTED_CLASS);
    } else {
        element.swap_class(SELECTED_CLASS, UNSELECTED_CLASS);
    }
}

/// Project one instance onto the page: the input element's value attribute
/// plus every button's marker classes.
pub fn project_instance(instance: &TableInstance, dom: &mut Dom) {
    if let Some(element) = dom.get_mut(instance.input_element()) {
        element.set_attr(VALUE_ATTR, instance.input().value());
    }
    for idx in 0..instance.buttons().len() {
        project_button(instance, idx, dom);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementData;
    use crate::model::{Selection, TagButton};

    fn setup() -> (Dom, TableInstance) {
        let mut dom = Dom::new();
        let wrap = dom.insert(ElementData::new("div").with_class("filter-wrapper"));
        let input = dom.insert_child(wrap, ElementData::new("input"));
        let btn_a = dom.insert_child(
            wrap,
            ElementData::new("button").with_class(UNSELECTED_CLASS).with_text("rust"),
        );
        let btn_b = dom.insert_child(
            wrap,
            ElementData::new("button").with_class(UNSELECTED_CLASS).with_text("wasm"),
        );
        let instance = TableInstance::new(wrap, input)
            .with_button(TagButton::new("rust", btn_a))
            .with_button(TagButton::new("wasm", btn_b));
        (dom, instance)
    }

    #[test]
    fn project_button_selected_swaps_markers() {
        let (mut dom, mut instance) = setup();
        instance.input_mut().set_value("rust");
        instance.reconcile();

        project_button(&instance, 0, &mut dom);
        let el = dom.get(instance.buttons()[0].element()).unwrap();
        assert!(el.has_class(SELECTED_CLASS));
        assert!(!el.has_class(UNSELECTED_CLASS));
    }

    #[test]
    fn project_button_unselected_restores_marker() {
        let (mut dom, mut instance) = setup();
        instance.input_mut().set_value("rust");
        instance.reconcile();
        project_instance(&instance, &mut dom);

        instance.input_mut().set_value("");
        instance.reconcile();
        project_instance(&instance, &mut dom);

        let el = dom.get(instance.buttons()[0].element()).unwrap();
        assert!(el.has_class(UNSELECTED_CLASS));
        assert!(!el.has_class(SELECTED_CLASS));
    }

    #[test]
    fn project_instance_mirrors_value_attr() {
        let (mut dom, mut instance) = setup();
        instance.input_mut().set_value("rust wasm");
        project_instance(&instance, &mut dom);
        let el = dom.get(instance.input_element()).unwrap();
        assert_eq!(el.attr(VALUE_ATTR), Some("rust wasm"));
    }

    #[test]
    fn projection_is_idempotent() {
        let (mut dom, mut instance) = setup();
        instance.input_mut().set_value("rust");
        instance.reconcile();
        project_instance(&instance, &mut dom);
        let before = dom.get(instance.buttons()[0].element()).unwrap().classes.clone();
        project_instance(&instance, &mut dom);
        let after = dom.get(instance.buttons()[0].element()).unwrap().classes.clone();
        assert_eq!(before, after);
    }

    #[test]
    fn project_survives_removed_element() {
        let (mut dom, mut instance) = setup();
        let gone = instance.buttons()[1].element();
        dom.remove(gone);
        instance.input_mut().set_value("wasm");
        instance.reconcile();
        // Must not panic on the missing element.
        project_instance(&instance, &mut dom);
    }

    #[test]
    fn default_state_keeps_unselected_markers() {
        let (mut dom, instance) = setup();
        project_instance(&instance, &mut dom);
        for b in instance.buttons() {
            let el = dom.get(b.element()).unwrap();
            assert!(el.has_class(UNSELECTED_CLASS));
            assert!(!el.has_class(SELECTED_CLASS));
        }
    }
}
