//! Theme Module
//!
//! Light/dark theming for the desktop client:
//!
//! - `colors` - The two palettes and role badge colors
//! - `styles` - Applying a palette to the egui context, frame builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::app::theme::{styles, ThemeMode};
//!
//! let mode = ThemeMode::Dark;
//! styles::apply_theme(ctx, mode);
//! let palette = mode.palette();
//! ```

pub mod colors;
pub mod styles;

pub use colors::Palette;

/// Dark/light flag exposed by the theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark
    pub fn toggle(&mut self) {
        *self = match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    /// The palette for this mode
    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeMode::Light => &colors::LIGHT,
            ThemeMode::Dark => &colors::DARK,
        }
    }
}
