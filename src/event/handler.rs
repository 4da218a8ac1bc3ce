//! Event dispatch: message queue and bubble path computation.
//!
//! [`EventDispatcher`] maintains a queue of [`Envelope`]s. The `bubble_path`
//! static method computes the traversal order from an element up to the page
//! root; the page uses it both to route notifications to the instance that
//! owns the sending element and to model delivery to ancestor listeners.

use std::collections::VecDeque;

use super::message::Envelope;
use crate::dom::{Dom, ElementId};

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// Queue-based event dispatcher.
///
/// Messages are enqueued via `push` and drained for processing via `drain`.
/// The dispatcher does not itself route messages; the page drains the queue
/// and walks each envelope's bubble path through the element tree.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<Envelope>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue a message envelope for later processing.
    pub fn push(&mut self, envelope: Envelope) {
        self.queue.push_back(envelope);
    }

    /// Drain all pending messages and return them as a `Vec`.
    ///
    /// The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<Envelope> {
        self.queue.drain(..).collect()
    }

    /// Number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Compute the bubble path from `start` up to the root (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`.
    /// If `start` does not exist in the tree, returns an empty vec.
    pub fn bubble_path(dom: &Dom, start: ElementId) -> Vec<ElementId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(dom.ancestors(start));
        path
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementData;
    use crate::event::message::{ButtonPressed, InputChanged, Refresh};

    /// body -> wrap -> (input, btn), plus a sibling aside.
    fn build_tree() -> (Dom, ElementId, ElementId, ElementId, ElementId, ElementId) {
        let mut dom = Dom::new();
        let body = dom.insert(ElementData::new("body"));
        let wrap = dom.insert_child(body, ElementData::new("div"));
        let aside = dom.insert_child(body, ElementData::new("aside"));
        let input = dom.insert_child(wrap, ElementData::new("input"));
        let btn = dom.insert_child(wrap, ElementData::new("button"));
        (dom, body, wrap, aside, input, btn)
    }

    #[test]
    fn new_dispatcher_is_empty() {
        let disp = EventDispatcher::new();
        assert!(disp.is_empty());
        assert_eq!(disp.pending_count(), 0);
    }

    #[test]
    fn push_and_drain() {
        let (_, body, ..) = build_tree();
        let mut disp = EventDispatcher::new();
        disp.push(Envelope::new(ButtonPressed, body));
        disp.push(Envelope::synthetic(InputChanged, body));

        assert_eq!(disp.pending_count(), 2);
        let messages = disp.drain();
        assert_eq!(messages.len(), 2);
        assert!(disp.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let (_, body, ..) = build_tree();
        let mut disp = EventDispatcher::new();
        disp.push(Envelope::new(ButtonPressed, body));
        disp.push(Envelope::synthetic(InputChanged, body));
        disp.push(Envelope::new(Refresh, body));

        let messages = disp.drain();
        assert!(messages[0].downcast_ref::<ButtonPressed>().is_some());
        assert!(messages[1].downcast_ref::<InputChanged>().is_some());
        assert!(messages[2].downcast_ref::<Refresh>().is_some());
    }

    #[test]
    fn drain_empty() {
        let mut disp = EventDispatcher::new();
        assert!(disp.drain().is_empty());
    }

    #[test]
    fn bubble_path_from_leaf() {
        let (dom, body, wrap, _aside, _input, btn) = build_tree();
        let path = EventDispatcher::bubble_path(&dom, btn);
        assert_eq!(path, vec![btn, wrap, body]);
    }

    #[test]
    fn bubble_path_from_root() {
        let (dom, body, ..) = build_tree();
        let path = EventDispatcher::bubble_path(&dom, body);
        assert_eq!(path, vec![body]);
    }

    #[test]
    fn bubble_path_sibling_does_not_include_wrapper() {
        let (dom, body, wrap, aside, ..) = build_tree();
        let path = EventDispatcher::bubble_path(&dom, aside);
        assert_eq!(path, vec![aside, body]);
        assert!(!path.contains(&wrap));
    }

    #[test]
    fn bubble_path_nonexistent_element() {
        let (mut dom, ..) = build_tree();
        let stale = dom.insert(ElementData::new("ghost"));
        dom.remove(stale);
        assert!(EventDispatcher::bubble_path(&dom, stale).is_empty());
    }
}
