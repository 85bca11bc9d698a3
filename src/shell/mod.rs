//! Application Shell
//!
//! Platform-independent model of the application delegate: on the launch
//! notification it builds the window and its button, and on every tap it
//! advances the counter and retitles the button.
//!
//! # Lifecycle
//!
//! ```ignore
//! host ── did_finish_launching ──▶ AppShell  (window built, key + visible)
//! user ── touch up inside ───────▶ AppShell::on_touch_up_inside
//!                                      ↓
//!                                  counter += 1, title = "Click #N"
//! ```
//!
//! Front-ends (see `floem_app`) render [`Window`] and forward pointer clicks
//! on the button to [`AppShell::on_touch_up_inside`].

pub mod counter;
pub mod geometry;

pub use counter::{title_for, ClickCounter, INITIAL_TITLE, TAP_TITLE_PREFIX};
pub use geometry::{Color, Rect, Screen};

use crate::error::ShellError;

/// Fixed frame of the counter button
pub const BUTTON_FRAME: Rect = Rect::new(115.0, 121.0, 91.0, 37.0);

/// Startup arguments handed over by the host; not interpreted by the shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub args: Vec<String>,
}

impl LaunchOptions {
    pub fn from_env() -> Self {
        Self {
            args: std::env::args().skip(1).collect(),
        }
    }
}

/// Lifecycle callbacks the host invokes on the application
pub trait ApplicationDelegate {
    /// Called once the host has finished launching the process.
    ///
    /// Returns `true` when the application initialized successfully.
    fn did_finish_launching(&mut self, screen: &Screen, options: &LaunchOptions) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    RoundedRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub kind: ButtonKind,
    pub frame: Rect,
    pub title: String,
}

impl Button {
    fn new(kind: ButtonKind, frame: Rect, title: impl Into<String>) -> Self {
        Self {
            kind,
            frame,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub frame: Rect,
    pub background: Color,
    pub subviews: Vec<Button>,
    key_and_visible: bool,
}

impl Window {
    fn new(frame: Rect) -> Self {
        Self {
            frame,
            background: Color::WHITE,
            subviews: Vec::new(),
            key_and_visible: false,
        }
    }

    fn add_subview(&mut self, button: Button) {
        self.subviews.push(button);
    }

    fn make_key_and_visible(&mut self) {
        self.key_and_visible = true;
    }

    pub fn is_key_and_visible(&self) -> bool {
        self.key_and_visible
    }
}

/// The application delegate: owns the window and the click counter
#[derive(Debug, Clone, Default)]
pub struct AppShell {
    window: Option<Window>,
    counter: ClickCounter,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_launched(&self) -> bool {
        self.window.is_some()
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// The counter button, once the window exists
    pub fn button(&self) -> Option<&Button> {
        self.window.as_ref().and_then(|w| w.subviews.first())
    }

    pub fn click_count(&self) -> u64 {
        self.counter.count()
    }

    /// Current button title, or the initial title before launch
    pub fn button_title(&self) -> &str {
        self.button()
            .map(|b| b.title.as_str())
            .unwrap_or(INITIAL_TITLE)
    }

    /// Tap handler registered on the counter button.
    ///
    /// Returns the new click count.
    pub fn on_touch_up_inside(&mut self) -> Result<u64, ShellError> {
        let button = self
            .window
            .as_mut()
            .and_then(|w| w.subviews.first_mut())
            .ok_or(ShellError::NotLaunched)?;

        let count = self.counter.increment();
        button.title = self.counter.title();
        tracing::debug!(count, title = %button.title, "Button tapped");
        Ok(count)
    }
}

impl ApplicationDelegate for AppShell {
    fn did_finish_launching(&mut self, screen: &Screen, options: &LaunchOptions) -> bool {
        if self.window.is_some() {
            tracing::warn!("Launch notification received twice; ignoring");
            return false;
        }

        let button = Button::new(ButtonKind::RoundedRect, BUTTON_FRAME, INITIAL_TITLE);

        let mut window = Window::new(screen.bounds());
        window.background = Color::LIGHT_GRAY;
        window.add_subview(button);
        window.make_key_and_visible();

        if !window.frame.contains_rect(&BUTTON_FRAME) {
            tracing::warn!(
                screen = ?window.frame,
                button = ?BUTTON_FRAME,
                "Button extends past the screen bounds"
            );
        }

        tracing::info!(
            width = window.frame.width,
            height = window.frame.height,
            args = options.args.len(),
            "Application finished launching"
        );

        self.window = Some(window);
        true
    }
}
