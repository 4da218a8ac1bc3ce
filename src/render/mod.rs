//! Projection of model state onto the page.

pub mod project;

pub use project::{
    project_button, project_instance, SELECTED_CLASS, UNSELECTED_CLASS, VALUE_ATTR,
};
