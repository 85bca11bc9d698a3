//! ClickDemo Library
//!
//! A single window with a single button that counts taps:
//! - `shell`: platform-independent application delegate and click counter
//! - `config`: optional TOML settings
//! - `logging`: tracing subscriber setup
//! - `floem_app`: Floem front-end (feature `floem-gui`)

pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

#[cfg(feature = "floem-gui")]
pub mod floem_app;

pub use error::{DemoError, Result};
