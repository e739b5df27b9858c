//! SocDesk - Main Library
//!
//! SocDesk is the native desktop front-end for a student-society management
//! service. This crate provides the society directory **user picker**: an
//! autocomplete widget that loads the member directory once, filters it by
//! name, short name, or email as the user types, and lets the user commit a
//! single member as the selected value (for example, as the assignee of a
//! task).
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types independent of the UI layer
//!   - User records and roles as the directory service returns them
//!   - Directory error types
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - Configuration (server URL, session token)
//!   - Directory API client and background loading
//!   - Light/dark theme
//!   - The user picker widget (state + renderer)
//!
//! # Usage
//!
//! ```rust,no_run
//! use socdesk::app::picker::{UserPickerOptions, UserPickerState};
//!
//! let mut picker = UserPickerState::new();
//! let options = UserPickerOptions::default();
//! // In an egui update loop:
//! // picker.poll_pending_load();
//! // let response = socdesk::app::picker::render(ui, &mut picker, &options, palette);
//! // if let Some(change) = response.change { /* forward (email, name) */ }
//! ```

pub mod app;
pub mod shared;
