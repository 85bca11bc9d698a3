//! Geometry and Color Primitives
//!
//! Platform-independent equivalents of the rectangle and color values the
//! shell hands to the window system.

/// Axis-aligned rectangle in points, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Neutral light gray (white component 2/3)
    pub const LIGHT_GRAY: Color = Color::rgb8(170, 170, 170); // #aaaaaa

    pub const WHITE: Color = Color::rgb8(255, 255, 255);
}

/// Display the application is launched on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    bounds: Rect,
}

impl Screen {
    /// Width of the reference screen the button frame was laid out for
    pub const REFERENCE_WIDTH: f64 = 320.0;
    /// Height of the reference screen the button frame was laid out for
    pub const REFERENCE_HEIGHT: f64 = 480.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
        }
    }

    /// Full bounds of the screen at the time of the call
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(Self::REFERENCE_WIDTH, Self::REFERENCE_HEIGHT)
    }
}
