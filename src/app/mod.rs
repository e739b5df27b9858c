//! egui Native Desktop App Module
//!
//! This module provides the native desktop client built with egui/eframe.
//!
//! # Module Structure
//!
//! ```text
//! app/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Demo shell entry point (binary)
//! ├── config.rs    - Configuration (server URL, session token)
//! ├── directory.rs - Directory API client and background loading
//! ├── theme/       - Light/dark palettes and style application
//! └── picker/      - The user picker widget (state + renderer)
//! ```

pub mod config;
pub mod directory;
pub mod picker;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use directory::{spawn_load_users, DirectoryClient, LoadUsersResult};
pub use picker::{SelectionChange, UserPickerOptions, UserPickerResponse, UserPickerState};
pub use theme::ThemeMode;
