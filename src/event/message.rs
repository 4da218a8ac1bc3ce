//! Message trait, envelope, and built-in messages.
//!
//! The [`Message`] trait is object-safe and supports downcasting via `Any`.
//! [`Envelope`] wraps a boxed message with routing metadata: the sending
//! element, an optional target, and the bubbles/cancelable flags the page's
//! event contract requires. Built-in messages: [`InputChanged`],
//! [`ButtonPressed`], [`Refresh`].

use std::any::Any;

use crate::dom::ElementId;

// ---------------------------------------------------------------------------
// Message trait
// ---------------------------------------------------------------------------

/// Object-safe message trait.
///
/// All messages must implement `as_any` for downcasting and `message_name`
/// for debug/logging purposes.
pub trait Message: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable name for this message type.
    fn message_name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Wraps a boxed message with routing metadata.
pub struct Envelope {
    /// The message payload.
    pub message: Box<dyn Message>,
    /// The element that sent this message.
    pub sender: ElementId,
    /// If `Some`, the message is delivered to a specific element only.
    /// If `None`, delivery follows the bubble path from the sender.
    pub target: Option<ElementId>,
    /// Whether this message travels up through ancestor elements.
    pub bubbles: bool,
    /// Whether a listener may cancel default handling.
    pub cancelable: bool,
    /// Whether this message has been handled (stops propagation).
    pub handled: bool,
}

impl Envelope {
    /// Create a new bubbling, non-cancelable envelope from the sender.
    pub fn new(message: impl Message, sender: ElementId) -> Self {
        Self {
            message: Box::new(message),
            sender,
            target: None,
            bubbles: true,
            cancelable: false,
            handled: false,
        }
    }

    /// Create a synthetic change notification: bubbling and cancelable, so
    /// external listeners observe it exactly like a user-initiated one.
    pub fn synthetic(message: impl Message, sender: ElementId) -> Self {
        Self {
            cancelable: true,
            ..Self::new(message, sender)
        }
    }

    /// Create an envelope targeted at a specific element.
    pub fn targeted(message: impl Message, sender: ElementId, target: ElementId) -> Self {
        Self {
            target: Some(target),
            ..Self::new(message, sender)
        }
    }

    /// Attempt to downcast the message to a concrete type.
    pub fn downcast_ref<T: Message + 'static>(&self) -> Option<&T> {
        self.message.as_any().downcast_ref::<T>()
    }

    /// Mark this envelope as handled, stopping further propagation.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("message_name", &self.message.message_name())
            .field("sender", &self.sender)
            .field("target", &self.target)
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .field("handled", &self.handled)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Built-in messages
// ---------------------------------------------------------------------------

/// A filter input's value changed, by typing or by the applier.
///
/// Emitted after every applier run regardless of whether the value text
/// actually differs from before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputChanged;

impl Message for InputChanged {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "InputChanged"
    }
}

/// A tag button was activated. The envelope's sender is the button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPressed;

impl Message for ButtonPressed {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "ButtonPressed"
    }
}

/// Request a full re-projection of model state onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh;

impl Message for Refresh {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "Refresh"
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn make_id(sm: &mut SlotMap<ElementId, ()>) -> ElementId {
        sm.insert(())
    }

    #[test]
    fn message_names() {
        assert_eq!(InputChanged.message_name(), "InputChanged");
        assert_eq!(ButtonPressed.message_name(), "ButtonPressed");
        assert_eq!(Refresh.message_name(), "Refresh");
    }

    #[test]
    fn envelope_new_bubbles_not_cancelable() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let env = Envelope::new(ButtonPressed, sender);
        assert_eq!(env.sender, sender);
        assert!(env.target.is_none());
        assert!(env.bubbles);
        assert!(!env.cancelable);
        assert!(!env.handled);
    }

    #[test]
    fn envelope_synthetic_is_cancelable() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let env = Envelope::synthetic(InputChanged, sender);
        assert!(env.bubbles);
        assert!(env.cancelable);
    }

    #[test]
    fn envelope_targeted() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let target = make_id(&mut sm);
        let env = Envelope::targeted(Refresh, sender, target);
        assert_eq!(env.target, Some(target));
    }

    #[test]
    fn envelope_downcast_ref_success() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let env = Envelope::new(InputChanged, sender);
        assert!(env.downcast_ref::<InputChanged>().is_some());
    }

    #[test]
    fn envelope_downcast_ref_wrong_type() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let env = Envelope::new(InputChanged, sender);
        assert!(env.downcast_ref::<ButtonPressed>().is_none());
    }

    #[test]
    fn envelope_mark_handled() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let mut env = Envelope::new(ButtonPressed, sender);
        env.mark_handled();
        assert!(env.handled);
    }

    #[test]
    fn envelope_debug_format() {
        let mut sm = SlotMap::with_key();
        let sender = make_id(&mut sm);
        let env = Envelope::synthetic(InputChanged, sender);
        let dbg = format!("{env:?}");
        assert!(dbg.contains("InputChanged"));
        assert!(dbg.contains("cancelable"));
    }
}
