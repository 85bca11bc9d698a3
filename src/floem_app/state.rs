//! Application State Management
//!
//! Wraps the [`AppShell`] in a Floem `RwSignal` so views re-render when a tap
//! mutates it.
//!
//! # Reactivity Model
//!
//! ```ignore
//! Pointer click on button
//!     ↓
//! AppState::tap (shell.update → on_touch_up_inside)
//!     ↓
//! RwSignal notifies subscribers
//!     ↓
//! label(move || state.button_title()) repaints
//! ```

use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::error::ShellError;
use crate::shell::{AppShell, Color, Rect};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub shell: RwSignal<AppShell>,
}

impl AppState {
    /// Wrap an already launched shell
    pub fn new(shell: AppShell) -> Self {
        Self {
            shell: RwSignal::new(shell),
        }
    }

    /// Forward a tap to the shell's handler
    pub fn tap(&self) -> Result<u64, ShellError> {
        let mut result = Err(ShellError::NotLaunched);
        self.shell.update(|shell| result = shell.on_touch_up_inside());
        result
    }

    pub fn button_title(&self) -> String {
        self.shell.with(|shell| shell.button_title().to_string())
    }

    pub fn click_count(&self) -> u64 {
        self.shell.with(|shell| shell.click_count())
    }

    pub fn button_frame(&self) -> Option<Rect> {
        self.shell.with(|shell| shell.button().map(|b| b.frame))
    }

    pub fn window_background(&self) -> Option<Color> {
        self.shell.with(|shell| shell.window().map(|w| w.background))
    }
}
