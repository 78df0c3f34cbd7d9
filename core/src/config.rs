//! Configuration for reaching the employee server.

/// Environment variable holding the employee server's base URL.
pub const BASE_URL_ENV: &str = "EMPLOYEE_SERVER_BASE_URL";

/// Base URL used when `EMPLOYEE_SERVER_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8112";

/// Where the employee server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL (e.g. "http://localhost:8112"); API paths are appended to it.
    pub base_url: String,
}

impl DirectoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `EMPLOYEE_SERVER_BASE_URL`, falling back to
    /// `DEFAULT_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
