//! Navigation catalog types.

use serde::Deserialize;

/// Symbolic icon identifier.
///
/// Resolved to a renderable icon only at the presentation boundary
/// (`components::icons::resolve`), keeping data free of view types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Home,
    User,
    Briefcase,
    Clock,
    BarChart,
    BookOpen,
    Code,
    MessageSquare,
    Calendar,
    Trophy,
    #[default]
    FileText,
    AlertTriangle,
    Github,
    Linkedin,
    Mail,
}

/// Grouping of catalog items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCategory {
    /// Primary destinations, shown in the floating cluster
    #[default]
    Main,
    /// Further sections, listed in drawer and sidebar
    Secondary,
    /// Documents and outbound links
    Utility,
}

/// A single navigable destination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavigationItem {
    /// Absolute route (`/about`) or outbound URL when `external`
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    /// Opens a new browsing context instead of navigating in place
    #[serde(default)]
    pub external: bool,
    #[serde(default, rename = "icon")]
    pub icon_ref: IconRef,
    #[serde(default)]
    pub category: NavCategory,
}

impl NavigationItem {
    /// Tooltip text: label followed by badge, if any.
    pub fn tooltip(&self) -> String {
        match &self.badge {
            Some(badge) => format!("{} ({})", self.label, badge),
            None => self.label.clone(),
        }
    }
}

#[cfg(test)]
impl NavigationItem {
    /// Create an internal item with no description or badge.
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon_ref: IconRef) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            description: None,
            badge: None,
            external: false,
            icon_ref,
            category: NavCategory::Main,
        }
    }

    /// Builder-style badge setter.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Breadcrumb metadata for a known path segment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SegmentMeta {
    pub label: String,
    #[serde(default)]
    pub icon: IconRef,
    #[serde(default)]
    pub badge: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_includes_badge() {
        let item = NavigationItem::new("/projects", "Projects", IconRef::Briefcase).with_badge("12");
        assert_eq!(item.tooltip(), "Projects (12)");

        let plain = NavigationItem::new("/about", "About", IconRef::User);
        assert_eq!(plain.tooltip(), "About");
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: NavigationItem = toml::from_str(
            r#"
            path = "/now"
            label = "Now"
            "#,
        )
        .unwrap();
        assert!(!item.external);
        assert_eq!(item.icon_ref, IconRef::FileText);
        assert_eq!(item.category, NavCategory::Main);
        assert_eq!(item.badge, None);
    }

    #[test]
    fn test_icon_ref_kebab_case() {
        let meta: SegmentMeta = toml::from_str(
            r#"
            label = "Data Stories"
            icon = "bar-chart"
            badge = "New"
            "#,
        )
        .unwrap();
        assert_eq!(meta.icon, IconRef::BarChart);
        assert_eq!(meta.badge.as_deref(), Some("New"));
    }
}
