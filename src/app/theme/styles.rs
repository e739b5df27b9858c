//! Theme Styling Functions
//!
//! Helper functions for applying a palette to the egui context and for
//! building the frames used by the picker widget.

use egui::{CornerRadius, Stroke};

use super::colors::Palette;
use super::ThemeMode;

/// Apply a theme mode to the egui context
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let palette = mode.palette();
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = palette.window_bg;
    style.visuals.window_stroke = Stroke::new(1.0, palette.dropdown_border);

    // Panel styling
    style.visuals.panel_fill = palette.panel_bg;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = palette.input_bg;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);

    style.visuals.widgets.inactive.bg_fill = palette.input_bg;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_primary);

    style.visuals.widgets.hovered.bg_fill = palette.row_hover;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text_primary);

    style.visuals.widgets.active.bg_fill = palette.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.window_bg);

    // Selection color
    style.visuals.selection.bg_fill = palette.accent;
    style.visuals.selection.stroke = Stroke::new(1.0, palette.window_bg);

    style.visuals.override_text_color = Some(palette.text_primary);

    ctx.set_style(style);
}

/// Frame for the picker's dropdown list
pub fn dropdown_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.dropdown_bg)
        .stroke(Stroke::new(1.0, palette.dropdown_border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(4))
}

/// Frame for the committed-selection chip
pub fn chip_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.input_bg)
        .stroke(Stroke::new(1.0, palette.input_border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Frame for the search input row
pub fn input_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.input_bg)
        .stroke(Stroke::new(1.0, palette.input_border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
}
