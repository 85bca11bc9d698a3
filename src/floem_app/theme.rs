//! Theme and Color Definitions
//!
//! Colors and metrics for the rounded-rect push button, plus the conversion
//! from shell colors to Floem's peniko colors.

use floem::peniko::Color;

use crate::shell;

/// Convert a shell color into a Floem color
pub fn to_floem(color: shell::Color) -> Color {
    Color::rgba8(color.r, color.g, color.b, color.a)
}

/// Rounded-rect button styling
pub mod button {
    use super::Color;

    pub const FILL: Color = Color::rgb8(255, 255, 255);          // #ffffff
    pub const FILL_PRESSED: Color = Color::rgb8(217, 217, 217);  // #d9d9d9
    pub const BORDER: Color = Color::rgb8(153, 153, 153);        // #999999
    pub const TEXT: Color = Color::rgb8(50, 79, 133);            // #324f85

    pub const CORNER_RADIUS: f64 = 8.0;
    pub const BORDER_WIDTH: f64 = 1.0;
    pub const FONT_SIZE: f64 = 15.0;
}
