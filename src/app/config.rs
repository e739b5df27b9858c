/// Default directory service URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration.
///
/// The server URL comes from `SOCDESK_API_URL` when set. The session token is
/// provided by the surrounding auth flow and attached to directory requests.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("SOCDESK_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            token: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit server URL
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: None,
        }
    }

    /// Set the session token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_server_url() {
        let config = Config::with_server_url("http://10.0.0.1:8080");
        assert_eq!(config.server_url(), "http://10.0.0.1:8080");
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_set_token() {
        let mut config = Config::with_server_url(DEFAULT_SERVER_URL);
        config.set_token(Some("test_token".to_string()));
        assert_eq!(config.get_token(), Some(&"test_token".to_string()));
    }

    #[test]
    fn test_clear_token() {
        let mut config = Config::with_server_url(DEFAULT_SERVER_URL);
        config.set_token(Some("test_token".to_string()));
        config.clear_token();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_server_url(DEFAULT_SERVER_URL);
        let url = config.api_url("/api/directory/users");
        assert_eq!(url, "http://127.0.0.1:3000/api/directory/users");
    }
}
