//! User Picker Widget
//!
//! An autocomplete for selecting one member out of the society directory.
//! The directory is loaded once in the background; typing filters it by
//! name, short name, or email; picking a row commits that member and clears
//! the search text. The committed member is shown as a chip with a clear
//! button, and the consumer is notified on every commit or clear.
//!
//! Split into:
//!
//! - **`state`** - Candidate set, query, filtering, and selection transitions.
//!   Pure of any UI concern, tested directly.
//! - **`view`** - The egui renderer: input row or committed chip, dropdown
//!   list, and outside-press dismissal.

pub mod state;
pub mod view;

pub use state::{filter_users, matches_query, SelectionChange, UserPickerState};
pub use view::{render, UserPickerOptions, UserPickerResponse};
