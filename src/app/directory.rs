//! Directory API Client
//!
//! This module loads the full user directory from the society management
//! service. The fetch happens once, in the background, and the result is
//! handed back over a channel that the picker polls each frame. If the picker
//! is torn down before the fetch completes, the receiver is gone and the send
//! simply fails.

use std::sync::mpsc::{self, Receiver};

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::shared::error::DirectoryError;
use crate::shared::user::{ListUsersResponse, User};

/// Result of a background directory load
pub type LoadUsersResult = Result<Vec<User>, DirectoryError>;

/// Directory API client
pub struct DirectoryClient {
    config: Config,
    client: Client,
}

impl DirectoryClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch the full user directory and normalize every record.
    ///
    /// Any malformed record fails the whole load; the caller treats that the
    /// same as an unreachable service and keeps its candidate set empty.
    pub fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.config.api_url("/api/directory/users");

        let rt = Runtime::new()
            .map_err(|e| DirectoryError::network(format!("Failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let mut request = self.client.get(&url);
            if let Some(token) = self.config.get_token() {
                request = request.header("Authorization", format!("Bearer {}", token));
            }

            let response = request.send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(DirectoryError::status(status.as_u16(), error_text));
            }

            let list_response = response
                .json::<ListUsersResponse>()
                .await
                .map_err(|e| DirectoryError::decode(format!("Failed to parse response: {}", e)))?;

            list_response
                .users
                .into_iter()
                .map(User::from_record)
                .collect()
        })
    }
}

/// Start a background load of the user directory.
///
/// Returns the receiving end; hand it to
/// [`UserPickerState::begin_load`](crate::app::picker::UserPickerState::begin_load)
/// and poll once per frame.
pub fn spawn_load_users(config: Config) -> Receiver<LoadUsersResult> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let client = DirectoryClient::new(config);
        let result = client.fetch_users();
        if let Err(ref e) = result {
            tracing::warn!("Directory load finished with error: {}", e);
        }
        // The receiver may already be gone if the picker was torn down.
        let _ = tx.send(result);
    });

    rx
}
