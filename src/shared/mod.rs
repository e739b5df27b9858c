//! Shared Types
//!
//! Types that are independent of the UI layer: the user records returned by
//! the society directory service and the error taxonomy for loading them.

pub mod error;
pub mod user;

pub use error::DirectoryError;
pub use user::{ListUsersResponse, Role, User, UserRecord};
