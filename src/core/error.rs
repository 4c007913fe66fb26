//! Custom error types for the application.
//!
//! Nothing here is fatal. Callers log these and fall back to a degraded but
//! usable navigation state:
//!
//! - [`NavError`] - Browser navigation primitives (History API, `window.open`)
//! - [`CatalogError`] - Loading the embedded navigation catalog

use thiserror::Error;

/// Browser navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Browser window not available (non-browser render pass)
    #[error("Browser window not available")]
    NoWindow,
    /// `window.history` could not be accessed
    #[error("History API not available")]
    HistoryUnavailable,
    /// `history.pushState` rejected the new entry
    #[error("Failed to push history entry: {0}")]
    PushStateFailed(String),
    /// `window.open` failed or was blocked
    #[error("Failed to open external link: {0}")]
    OpenFailed(String),
}

/// Errors found while loading the navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// TOML could not be parsed into the catalog schema
    #[error("invalid navigation catalog: {0}")]
    Parse(String),
    /// Two items share the same path
    #[error("duplicate navigation path '{0}'")]
    DuplicatePath(String),
    /// Internal item path does not start with '/'
    #[error("navigation path '{0}' must be absolute")]
    RelativePath(String),
    /// External item has no URL scheme
    #[error("external link '{0}' has no scheme")]
    InvalidExternal(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(NavError::NoWindow.to_string(), "Browser window not available");
        assert_eq!(
            CatalogError::DuplicatePath("/about".into()).to_string(),
            "duplicate navigation path '/about'"
        );
        assert_eq!(
            CatalogError::RelativePath("about".into()).to_string(),
            "navigation path 'about' must be absolute"
        );
    }
}
