//! User Data Structures
//!
//! Represents a member of the society directory. The directory service
//! returns raw [`UserRecord`]s; [`User::from_record`] normalizes them once
//! (lower-cased email, parsed timestamp) before they enter the in-memory
//! candidate set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::DirectoryError;

/// Society role tags, as stored by the directory service.
///
/// Unknown tags fold to `Member` so a new role added server-side does not
/// break older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Executive board
    #[serde(rename = "EB")]
    Eb,
    /// Executive committee
    #[serde(rename = "EC")]
    Ec,
    /// Core team
    Core,
    /// Regular member
    #[serde(other)]
    Member,
}

impl Role {
    /// Badge label shown next to a user in the directory.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Eb => "EB",
            Role::Ec => "EC",
            Role::Core => "Core",
            Role::Member => "Member",
        }
    }
}

/// A raw directory record, exactly as the service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Document id assigned by the directory service
    pub id: String,
    /// Email address (case not guaranteed by the service)
    pub email: String,
    /// Full display name
    pub name: String,
    /// Optional short name / nickname
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    /// Society role tag
    pub role: Role,
    /// Creation time as an RFC 3339 string
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A normalized directory user, ready for matching and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable unique id
    pub id: String,
    /// Email address, always lower-cased
    pub email: String,
    /// Full display name
    pub name: String,
    /// Optional short name / nickname
    pub short_name: Option<String>,
    /// Society role tag
    pub role: Role,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Normalize a raw record into a `User`.
    ///
    /// Lower-cases the email and parses the creation timestamp. A record
    /// with an unparseable timestamp makes the whole response malformed.
    pub fn from_record(record: UserRecord) -> Result<Self, DirectoryError> {
        let created_at = DateTime::parse_from_rfc3339(&record.created_at)
            .map_err(|e| {
                DirectoryError::invalid_record("createdAt", format!("{}: {}", record.created_at, e))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: record.id,
            email: record.email.to_lowercase(),
            name: record.name,
            short_name: record.short_name,
            role: record.role,
            created_at,
        })
    }

    /// Short name if present, otherwise the full name.
    pub fn display_label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    /// Avatar initial (first letter of the name)
    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?').to_ascii_uppercase()
    }
}

/// Response type for listing directory users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserRecord>,
}
