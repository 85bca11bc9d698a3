//! View Components
//!
//! UI components for the Floem application.

mod counter_button;

pub use counter_button::counter_button;
