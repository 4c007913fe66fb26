//! Path-based routing model.

/// Application route, backed by the URL pathname.
///
/// Always normalized: leading `/`, no trailing `/` (except root), no empty
/// segments, no query string or fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppRoute {
    path: String,
}

impl AppRoute {
    /// The site root `/`.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    /// Parse a pathname (or full href tail) into a normalized route.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let without_query = without_fragment.split('?').next().unwrap_or_default();

        let segments: Vec<&str> = without_query.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Self::root();
        }

        Self {
            path: format!("/{}", segments.join("/")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Non-empty path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}
