//! Floem-based GUI front-end for ClickDemo
//!
//! Launches the [`AppShell`] and then opens a single window sized to the
//! configured screen bounds. Clicks on the button are delivered as tap events.
//!
//! A desktop window has no device screen, so `Settings::screen()` (320x480 by
//! default) stands in for the screen bounds at launch, not the monitor size.

mod state;
mod views;
pub mod theme;

use floem::kurbo::Size;
use floem::prelude::*;
use floem::views::{container, Decorators};
use floem::window::WindowConfig;
use floem::Application;

pub use state::AppState;

use crate::config::Settings;
use crate::error::{DemoError, ShellError};
use crate::shell::{AppShell, ApplicationDelegate, Color, LaunchOptions};

/// Main application view
pub fn app_view(state: &AppState) -> impl IntoView {
    tracing::info!("Initializing Floem application view");
    let state = *state;
    let background = theme::to_floem(state.window_background().unwrap_or(Color::LIGHT_GRAY));

    container(views::counter_button(state))
        .style(move |s| s.size_full().background(background))
}

/// Launch the shell and run the event loop until the window closes
pub fn run(settings: &Settings) -> Result<(), DemoError> {
    let screen = settings.screen();
    let options = LaunchOptions::from_env();

    let mut shell = AppShell::new();
    let launched = shell.did_finish_launching(&screen, &options);
    tracing::info!(launched, "did_finish_launching returned");
    if !launched {
        return Err(ShellError::LaunchRejected.into());
    }

    let bounds = screen.bounds();
    let window_config = WindowConfig::default()
        .size(Size::new(bounds.width, bounds.height))
        .title(settings.window_title.clone());

    // Blocks until the last window is closed
    Application::new()
        .window(
            move |_| {
                let state = AppState::new(shell);
                app_view(&state)
            },
            Some(window_config),
        )
        .run();

    tracing::info!("Event loop exited");
    Ok(())
}
