//! Page: every bound table instance plus the event queue that drives them.

use tracing::debug;

use crate::dom::{Dom, ElementId};
use crate::event::{ButtonPressed, Envelope, EventDispatcher, InputChanged, Refresh};
use crate::render;

use super::instance::TableInstance;

/// The bound state of one page: zero or more independent table instances
/// and the dispatcher their notifications flow through.
///
/// Tag-driven edits and user-typed edits converge on the same
/// [`InputChanged`] notification, so everything downstream of the input
/// observes them identically. Routing is by bubble path: a notification
/// belongs to the instance whose root element lies on the path from the
/// sending element up to the page root, which is also what keeps instances
/// isolated from each other.
#[derive(Debug, Default)]
pub struct Page {
    instances: Vec<TableInstance>,
    dispatcher: EventDispatcher,
}

impl Page {
    /// Create a page over the given instances.
    pub fn new(instances: Vec<TableInstance>) -> Self {
        Self {
            instances,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// The bound instances.
    pub fn instances(&self) -> &[TableInstance] {
        &self.instances
    }

    /// One instance by index.
    pub fn instance(&self, idx: usize) -> Option<&TableInstance> {
        self.instances.get(idx)
    }

    /// Number of bound instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the page has no bound instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// The pending message queue. Useful for inspection in tests.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    // -----------------------------------------------------------------------
    // Event sources
    // -----------------------------------------------------------------------

    /// Enqueue an activation of the tag button backed by `element`.
    ///
    /// The press is resolved to an instance and applied during
    /// [`process`](Self::process).
    pub fn press_button(&mut self, element: ElementId) {
        self.dispatcher.push(Envelope::new(ButtonPressed, element));
    }

    /// Simulate the user typing `text` into the filter input backed by
    /// `input_element`, then enqueue the value-change notification.
    ///
    /// Unknown input elements are logged and ignored.
    pub fn type_text(&mut self, input_element: ElementId, text: &str) {
        let Some(instance) = self
            .instances
            .iter_mut()
            .find(|i| i.input_element() == input_element)
        else {
            debug!(?input_element, "type_text: no instance owns this input");
            return;
        };
        for ch in text.chars() {
            instance.input_mut().insert_char(ch);
        }
        self.dispatcher
            .push(Envelope::new(InputChanged, input_element));
    }

    /// Replace the value of the filter input backed by `input_element`, then
    /// enqueue the value-change notification.
    pub fn set_input_value(&mut self, input_element: ElementId, value: &str) {
        let Some(instance) = self
            .instances
            .iter_mut()
            .find(|i| i.input_element() == input_element)
        else {
            debug!(?input_element, "set_input_value: no instance owns this input");
            return;
        };
        instance.input_mut().set_value(value);
        self.dispatcher
            .push(Envelope::new(InputChanged, input_element));
    }

    /// Re-project every instance onto the page immediately.
    pub fn refresh(&mut self, dom: &mut Dom) {
        for instance in &self.instances {
            render::project_instance(instance, dom);
        }
    }

    // -----------------------------------------------------------------------
    // Processing
    // -----------------------------------------------------------------------

    /// Drain and handle every pending message, including messages enqueued
    /// while handling (the applier's synthetic notification is picked up in
    /// the same call). Returns the number of envelopes handled.
    pub fn process(&mut self, dom: &mut Dom) -> usize {
        let mut handled = 0;
        while !self.dispatcher.is_empty() {
            for envelope in self.dispatcher.drain() {
                if envelope.handled {
                    continue;
                }
                if envelope.downcast_ref::<ButtonPressed>().is_some() {
                    self.on_button_pressed(dom, envelope.sender);
                } else if envelope.downcast_ref::<InputChanged>().is_some() {
                    self.on_input_changed(dom, envelope.sender);
                } else if envelope.downcast_ref::<Refresh>().is_some() {
                    self.refresh(dom);
                } else {
                    debug!(message = envelope.message.message_name(), "unhandled message");
                }
                handled += 1;
            }
        }
        handled
    }

    /// Run the applier for the pressed button and emit the synthetic
    /// notification on its instance's input element.
    fn on_button_pressed(&mut self, dom: &Dom, sender: ElementId) {
        let Some(idx) = self.owning_instance(dom, sender) else {
            debug!(?sender, "button press outside any bound instance");
            return;
        };
        let instance = &mut self.instances[idx];
        let Some(button_idx) = instance.button_by_element(sender) else {
            debug!(?sender, "pressed element is not a bound tag button");
            return;
        };
        instance.press(button_idx);
        let input_element = instance.input_element();
        self.dispatcher
            .push(Envelope::synthetic(InputChanged, input_element));
    }

    /// Reconcile the owning instance and project the flipped buttons plus
    /// the mirrored input value.
    fn on_input_changed(&mut self, dom: &mut Dom, sender: ElementId) {
        let Some(idx) = self.owning_instance(dom, sender) else {
            debug!(?sender, "value change outside any bound instance");
            return;
        };
        let instance = &mut self.instances[idx];
        let flipped = instance.reconcile();
        if let Some(element) = dom.get_mut(instance.input_element()) {
            element.set_attr(render::VALUE_ATTR, instance.input().value());
        }
        for button_idx in flipped {
            render::project_button(instance, button_idx, dom);
        }
    }

    /// Resolve the instance owning `element` by walking its bubble path and
    /// looking for a bound instance root.
    fn owning_instance(&self, dom: &Dom, element: ElementId) -> Option<usize> {
        for id in EventDispatcher::bubble_path(dom, element) {
            if let Some(idx) = self.instances.iter().position(|i| i.root() == id) {
                return Some(idx);
            }
        }
        None
    }
}

// ===========================================================================
// Tests
// ===========================================================================
