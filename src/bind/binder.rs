//! Binder: discover table instances in the page and build the model.
//!
//! The binding layer consumes the structural contract produced by the
//! external table-rendering library: wrapper elements carrying the
//! [`BindOptions::wrapper_class`] class, each containing one text input and
//! a scoped collection of tag-button elements. Missing pieces are never
//! fatal: an absent input skips that one instance with a warning, and a
//! page with no wrappers at all binds to an empty page.

use tracing::{debug, warn};

use crate::dom::{Dom, ElementId};
use crate::model::{Page, Selection, TableInstance, TagButton};
use crate::render::{SELECTED_CLASS, UNSELECTED_CLASS};

use super::ready::ReadyGate;

// ---------------------------------------------------------------------------
// BindError
// ---------------------------------------------------------------------------

/// Why one instance root could not be bound.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The wrapper element has no text input beneath it.
    #[error("instance root has no filter input element")]
    MissingFilterInput { root: ElementId },
    /// The wrapper element itself is gone from the tree.
    #[error("instance root no longer exists")]
    MissingRoot { root: ElementId },
}

// ---------------------------------------------------------------------------
// BindOptions
// ---------------------------------------------------------------------------

/// Structural selectors and presentation tweaks applied while binding.
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Class marking a table-instance wrapper element.
    pub wrapper_class: String,
    /// Class marking a tag-button element inside a wrapper.
    pub button_class: String,
    /// If set, written to the filter input's `aria-label` attribute.
    pub search_label: Option<String>,
    /// If set, written to the filter input's `placeholder` attribute.
    pub search_placeholder: Option<String>,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            wrapper_class: "filter-wrapper".to_owned(),
            button_class: "tag-btn".to_owned(),
            search_label: None,
            search_placeholder: None,
        }
    }
}

impl BindOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrapper class (builder).
    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    /// Set the tag-button class (builder).
    pub fn with_button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = class.into();
        self
    }

    /// Set the accessible name written to the filter input (builder).
    pub fn with_search_label(mut self, label: impl Into<String>) -> Self {
        self.search_label = Some(label.into());
        self
    }

    /// Set the placeholder written to the filter input (builder).
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }
}

// ---------------------------------------------------------------------------
// bind
// ---------------------------------------------------------------------------

/// Bind every table instance found in the tree and return the page model.
///
/// Instances that cannot be bound are skipped with one warning each;
/// the remaining instances still bind. Finding no wrappers at all is a
/// logged no-op that yields an empty page.
pub fn bind(dom: &mut Dom, options: &BindOptions) -> Page {
    let roots = dom.query_by_class(&options.wrapper_class);
    if roots.is_empty() {
        debug!(class = %options.wrapper_class, "no table instances on this page");
        return Page::new(Vec::new());
    }

    let mut instances = Vec::with_capacity(roots.len());
    for root in roots {
        match bind_instance(dom, root, options) {
            Ok(instance) => instances.push(instance),
            Err(err) => warn!(?root, %err, "skipping table instance"),
        }
    }
    Page::new(instances)
}

/// Bind one instance root: locate its scoped input and tag buttons.
fn bind_instance(
    dom: &mut Dom,
    root: ElementId,
    options: &BindOptions,
) -> Result<TableInstance, BindError> {
    if !dom.contains(root) {
        return Err(BindError::MissingRoot { root });
    }
    let input_element = dom
        .query_tag_within(root, "input")
        .ok_or(BindError::MissingFilterInput { root })?;

    relabel_input(dom, input_element, options);

    let mut instance = TableInstance::new(root, input_element);
    for element in dom.query_class_within(root, &options.button_class) {
        let Some(data) = dom.get(element) else {
            continue;
        };
        let label = data.text.clone();
        if label.is_empty() {
            // An empty label is a substring of everything; not a usable tag.
            debug!(?element, "skipping tag button with empty label");
            continue;
        }
        // A server-rendered selected marker is the button's initial state;
        // the model must agree with it or the first press inverts.
        let selection = if data.has_class(SELECTED_CLASS) {
            Selection::Selected
        } else {
            Selection::Unselected
        };
        instance = instance.with_button(TagButton::new(label, element).with_selection(selection));
        if let Some(data) = dom.get_mut(element) {
            if !data.has_class(UNSELECTED_CLASS) && !data.has_class(SELECTED_CLASS) {
                data.add_class(UNSELECTED_CLASS);
            }
        }
    }
    Ok(instance)
}

/// Apply the presentation contract: accessible name and placeholder text.
fn relabel_input(dom: &mut Dom, input_element: ElementId, options: &BindOptions) {
    let Some(data) = dom.get_mut(input_element) else {
        return;
    };
    if let Some(label) = &options.search_label {
        data.set_attr("aria-label", label.clone());
    }
    if let Some(placeholder) = &options.search_placeholder {
        data.set_attr("placeholder", placeholder.clone());
    }
}

// ---------------------------------------------------------------------------
// Binder
// ---------------------------------------------------------------------------

/// Gated, single-shot binding entry point.
///
/// Wraps [`bind`] behind a [`ReadyGate`] so binding happens once the host
/// signals that the table widget is mounted, and guards re-invocation:
/// running the binder a second time must not double-bind.
#[derive(Debug)]
pub struct Binder {
    gate: ReadyGate,
    options: BindOptions,
    bound: bool,
}

impl Binder {
    /// Create a binder with the given options and an unsignaled gate.
    pub fn new(options: BindOptions) -> Self {
        Self {
            gate: ReadyGate::new(),
            options,
            bound: false,
        }
    }

    /// The readiness gate, for the host to signal.
    pub fn gate(&self) -> &ReadyGate {
        &self.gate
    }

    /// Whether this binder has already run.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Await readiness, then bind the page once.
    ///
    /// The first call returns the bound page; any later call is a guarded
    /// no-op returning `None`.
    pub async fn run(&mut self, dom: &mut Dom) -> Option<Page> {
        if self.bound {
            debug!("binder already ran; ignoring re-invocation");
            return None;
        }
        self.gate.wait_ready().await;
        self.bound = true;
        Some(bind(dom, &self.options))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
