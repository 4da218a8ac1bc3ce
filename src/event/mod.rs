//! Event system: messages, envelopes, queue-based dispatch.

pub mod handler;
pub mod message;

pub use handler::EventDispatcher;
pub use message::{ButtonPressed, Envelope, InputChanged, Message, Refresh};
