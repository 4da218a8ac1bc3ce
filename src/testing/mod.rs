//! Headless test harness: drive a bound page without a host environment.

pub mod pilot;

pub use pilot::{button_element, sample_dom, Pilot};
