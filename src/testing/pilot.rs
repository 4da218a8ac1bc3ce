//! Pilot: programmatic interaction with a headless page.
//!
//! The `Pilot` owns a [`Dom`] and the [`Page`] bound from it, and provides
//! high-level methods to simulate user interaction (clicking tags, typing
//! into the filter) and inspect both model state and projected markup.

use crate::bind::{bind, BindOptions};
use crate::dom::{Dom, ElementData, ElementId};
use crate::model::Page;
use crate::render::UNSELECTED_CLASS;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// # Examples
///
/// ```
/// use tagsync::testing::{sample_dom, Pilot};
///
/// let mut pilot = Pilot::new(sample_dom(&[&["rust", "wasm"]]));
/// pilot.click_label(0, "rust");
/// assert!(pilot.is_selected(0, "rust"));
/// assert_eq!(pilot.value(0), " rust ");
/// ```
pub struct Pilot {
    dom: Dom,
    page: Page,
}

impl Pilot {
    /// Bind the given tree with default options.
    pub fn new(mut dom: Dom) -> Self {
        let page = bind(&mut dom, &BindOptions::default());
        Self { dom, page }
    }

    /// Bind the given tree with custom options.
    pub fn with_options(mut dom: Dom, options: &BindOptions) -> Self {
        let page = bind(&mut dom, options);
        Self { dom, page }
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Click the button with the given label in one instance, then process
    /// the resulting notifications.
    ///
    /// # Panics
    ///
    /// Panics if the instance or label does not exist; tests want that loud.
    pub fn click_label(&mut self, instance: usize, label: &str) {
        let inst = self.page.instance(instance).expect("no such instance");
        let idx = inst.button_by_label(label).expect("no such label");
        let element = inst.buttons()[idx].element();
        self.page.press_button(element);
        self.page.process(&mut self.dom);
    }

    /// Type text into one instance's filter input, then process.
    pub fn type_text(&mut self, instance: usize, text: &str) {
        let input = self
            .page
            .instance(instance)
            .expect("no such instance")
            .input_element();
        self.page.type_text(input, text);
        self.page.process(&mut self.dom);
    }

    /// Replace one instance's filter value, then process.
    pub fn set_value(&mut self, instance: usize, value: &str) {
        let input = self
            .page
            .instance(instance)
            .expect("no such instance")
            .input_element();
        self.page.set_input_value(input, value);
        self.page.process(&mut self.dom);
    }

    /// Process any pending notifications without new interaction.
    pub fn process(&mut self) -> usize {
        self.page.process(&mut self.dom)
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// One instance's current filter value.
    pub fn value(&self, instance: usize) -> &str {
        self.page
            .instance(instance)
            .expect("no such instance")
            .input()
            .value()
    }

    /// Whether the button with the given label is selected in the model.
    pub fn is_selected(&self, instance: usize, label: &str) -> bool {
        let inst = self.page.instance(instance).expect("no such instance");
        let idx = inst.button_by_label(label).expect("no such label");
        inst.buttons()[idx].is_selected()
    }

    /// Whether the projected element for a label carries the given class.
    pub fn element_has_class(&self, instance: usize, label: &str, class: &str) -> bool {
        let inst = self.page.instance(instance).expect("no such instance");
        let idx = inst.button_by_label(label).expect("no such label");
        self.dom
            .get(inst.buttons()[idx].element())
            .is_some_and(|data| data.has_class(class))
    }

    /// Borrow the underlying page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Borrow the underlying element tree.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Borrow the underlying element tree mutably.
    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Build a page tree in the default structural contract: one wrapper per
/// entry, each holding an input and one tag button per label.
pub fn sample_dom(instances: &[&[&str]]) -> Dom {
    let mut dom = Dom::new();
    let body = dom.insert(ElementData::new("body"));
    for labels in instances {
        let wrap = dom.insert_child(body, ElementData::new("div").with_class("filter-wrapper"));
        dom.insert_child(wrap, ElementData::new("input"));
        for label in *labels {
            dom.insert_child(
                wrap,
                ElementData::new("button")
                    .with_class("tag-btn")
                    .with_class(UNSELECTED_CLASS)
                    .with_text(*label),
            );
        }
    }
    dom
}

/// The button element backing a label, for tests that need raw ids.
pub fn button_element(pilot: &Pilot, instance: usize, label: &str) -> Option<ElementId> {
    let inst = pilot.page().instance(instance)?;
    let idx = inst.button_by_label(label)?;
    Some(inst.buttons()[idx].element())
}

// ===========================================================================
// Tests
// ===========================================================================
