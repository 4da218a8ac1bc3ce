//! # tagsync
//!
//! Bidirectional synchronization between a free-text filter input and a set
//! of clickable tag buttons, modeled headlessly.
//!
//! Documentation tables often pair a filter box with tag shortcuts: clicking
//! a tag toggles its label in and out of the filter text, and editing the
//! text lights up every tag whose label appears in it. tagsync keeps that
//! state in an explicit in-memory model and projects it onto a slotmap-backed
//! element tree, so the whole interaction is testable without a browser.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed element arena with tree operations and queries
//! - **[`model`]** — Authoritative state: filter input, tag buttons, instances, page
//! - **[`sync`]** — The two directions: applier (click to text) and reconciler (text to buttons)
//! - **[`event`]** — Message trait, envelopes, queue-based dispatch with bubbling
//! - **[`bind`]** — Readiness gating and instance discovery over a raw tree
//! - **[`render`]** — Projection of model state onto element classes and attributes
//! - **[`testing`]** — Headless `Pilot` harness and tree fixtures
//!
//! ## Quick start
//!
//! ```
//! use tagsync::testing::{sample_dom, Pilot};
//!
//! let mut pilot = Pilot::new(sample_dom(&[&["rust", "tokio"]]));
//!
//! // Clicking a tag appends its label to the filter text.
//! pilot.click_label(0, "rust");
//! assert_eq!(pilot.value(0), " rust ");
//!
//! // Typing the other label selects its button too.
//! pilot.type_text(0, "tokio");
//! assert!(pilot.is_selected(0, "tokio"));
//! ```

// Foundation
pub mod dom;

// State and synchronization
pub mod model;
pub mod sync;

// Events
pub mod event;

// Discovery and projection
pub mod bind;
pub mod render;

// Test harness
pub mod testing;
