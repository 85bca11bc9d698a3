//! Counter Button Component

use floem::prelude::*;
use floem::views::{container, label, Decorators};

use crate::floem_app::state::AppState;
use crate::floem_app::theme::button;
use crate::shell::BUTTON_FRAME;

/// Rounded-rect push button at its fixed frame, titled from the shell
pub fn counter_button(state: AppState) -> impl IntoView {
    let frame = state.button_frame().unwrap_or(BUTTON_FRAME);

    container(
        label(move || state.button_title())
            .style(|s| s.font_size(button::FONT_SIZE).color(button::TEXT)),
    )
    .style(move |s| {
        s.position(floem::style::Position::Absolute)
            .inset_left(frame.x)
            .inset_top(frame.y)
            .width(frame.width)
            .height(frame.height)
            .justify_center()
            .items_center()
            .background(button::FILL)
            .border(button::BORDER_WIDTH)
            .border_color(button::BORDER)
            .border_radius(button::CORNER_RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .active(|s| s.background(button::FILL_PRESSED))
    })
    .on_click_stop(move |_| match state.tap() {
        Ok(count) => tracing::trace!(count, "Counter button clicked"),
        Err(e) => tracing::warn!("Ignoring click: {}", e),
    })
}
