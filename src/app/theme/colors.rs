//! Color Palettes
//!
//! Named colors for the light and dark themes. The widget and the demo shell
//! only ever read colors through a [`Palette`], never through egui's
//! built-in visuals, so both modes stay consistent.

use egui::Color32;

use crate::shared::user::Role;

/// All colors used by the client, for one theme mode.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Window / main area background
    pub window_bg: Color32,
    /// Side and top panel background
    pub panel_bg: Color32,
    /// Text input background
    pub input_bg: Color32,
    /// Text input border
    pub input_border: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary text (emails, hints)
    pub text_secondary: Color32,
    /// Accent for buttons and focus rings
    pub accent: Color32,
    /// Dropdown list background
    pub dropdown_bg: Color32,
    /// Dropdown list border
    pub dropdown_border: Color32,
    /// Hovered dropdown row
    pub row_hover: Color32,
    /// Avatar bubble fill
    pub avatar_bg: Color32,
    /// Avatar bubble initial
    pub avatar_fg: Color32,
    /// Error text
    pub error: Color32,
}

/// Light theme - white surfaces, blue accent
pub const LIGHT: Palette = Palette {
    window_bg: Color32::from_rgb(0xF9, 0xFA, 0xFB),
    panel_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    input_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    input_border: Color32::from_rgb(0xD1, 0xD5, 0xDB),
    text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
    text_secondary: Color32::from_rgb(0x6B, 0x72, 0x80),
    accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
    dropdown_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    dropdown_border: Color32::from_rgb(0xD1, 0xD5, 0xDB),
    row_hover: Color32::from_rgb(0xF3, 0xF4, 0xF6),
    avatar_bg: Color32::from_rgb(0xDB, 0xEA, 0xFE),
    avatar_fg: Color32::from_rgb(0x25, 0x63, 0xEB),
    error: Color32::from_rgb(0xDC, 0x26, 0x26),
};

/// Dark theme - gray-900 surfaces, lighter accent
pub const DARK: Palette = Palette {
    window_bg: Color32::from_rgb(0x11, 0x18, 0x27),
    panel_bg: Color32::from_rgb(0x1F, 0x29, 0x37),
    input_bg: Color32::from_rgb(0x1F, 0x29, 0x37),
    input_border: Color32::from_rgb(0x4B, 0x55, 0x63),
    text_primary: Color32::from_rgb(0xF9, 0xFA, 0xFB),
    text_secondary: Color32::from_rgb(0x9C, 0xA3, 0xAF),
    accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
    dropdown_bg: Color32::from_rgb(0x1F, 0x29, 0x37),
    dropdown_border: Color32::from_rgb(0x4B, 0x55, 0x63),
    row_hover: Color32::from_rgb(0x37, 0x41, 0x51),
    avatar_bg: Color32::from_rgb(0x1E, 0x3A, 0x8A),
    avatar_fg: Color32::from_rgb(0x93, 0xC5, 0xFD),
    error: Color32::from_rgb(0xF8, 0x71, 0x71),
};

impl Palette {
    /// Badge fill and text colors for a role tag.
    pub fn role_badge(&self, role: Role) -> (Color32, Color32) {
        match role {
            Role::Eb => (
                Color32::from_rgb(0xF3, 0xE8, 0xFF),
                Color32::from_rgb(0x6B, 0x21, 0xA8),
            ),
            Role::Ec => (
                Color32::from_rgb(0xDB, 0xEA, 0xFE),
                Color32::from_rgb(0x1E, 0x40, 0xAF),
            ),
            Role::Core => (
                Color32::from_rgb(0xDC, 0xFC, 0xE7),
                Color32::from_rgb(0x16, 0x65, 0x3A),
            ),
            Role::Member => (self.row_hover, self.text_secondary),
        }
    }
}
