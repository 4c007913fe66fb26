//! Static navigation catalog.
//!
//! Loaded once from the embedded `navigation.toml` asset and read-only at
//! runtime. Item order is display order.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::config::{NAVIGATION_TOML, breadcrumbs::ROOT_LABEL};
use crate::core::breadcrumbs::title_case;
use crate::core::error::CatalogError;
use crate::models::{AppRoute, NavCategory, NavigationItem, SegmentMeta};

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    items: Vec<NavigationItem>,
    #[serde(default)]
    social: Vec<NavigationItem>,
    #[serde(default)]
    segments: HashMap<String, SegmentMeta>,
    #[serde(default)]
    titles: HashMap<String, String>,
}

/// Navigation items, breadcrumb segment table and page titles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavCatalog {
    items: Vec<NavigationItem>,
    social: Vec<NavigationItem>,
    segments: HashMap<String, SegmentMeta>,
    titles: HashMap<String, String>,
}

impl NavCatalog {
    /// Parse and validate a catalog from TOML source.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(source)?;

        let mut seen = HashSet::new();
        for item in raw.items.iter().chain(raw.social.iter()) {
            if !seen.insert(item.path.as_str()) {
                return Err(CatalogError::DuplicatePath(item.path.clone()));
            }
            if item.external {
                if !has_scheme(&item.path) {
                    return Err(CatalogError::InvalidExternal(item.path.clone()));
                }
            } else if !item.path.starts_with('/') {
                return Err(CatalogError::RelativePath(item.path.clone()));
            }
        }

        Ok(Self {
            items: raw.items,
            social: raw.social,
            segments: raw.segments,
            titles: raw.titles,
        })
    }

    /// Load the catalog compiled into the binary.
    ///
    /// A broken asset degrades to an empty catalog; breadcrumbs still carry
    /// the root entry and unknown segments still get synthesized labels.
    pub fn embedded() -> Self {
        match Self::parse(NAVIGATION_TOML) {
            Ok(catalog) => {
                tracing::debug!(
                    items = catalog.items.len(),
                    segments = catalog.segments.len(),
                    "navigation catalog loaded"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to empty navigation catalog");
                Self::default()
            }
        }
    }

    /// All internal items in display order.
    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    /// Items of one category, display order preserved.
    pub fn items_in(&self, category: NavCategory) -> impl Iterator<Item = &NavigationItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items shown in the floating cluster; `Alt+<digit>` indexes into these.
    pub fn primary_items(&self) -> Vec<NavigationItem> {
        self.items_in(NavCategory::Main).cloned().collect()
    }

    /// Outbound social links.
    pub fn social(&self) -> &[NavigationItem] {
        &self.social
    }

    /// Breadcrumb metadata for a path segment.
    pub fn segment(&self, segment: &str) -> Option<&SegmentMeta> {
        self.segments.get(segment)
    }

    /// Human-readable title for a route.
    ///
    /// Resolution order: catalog item, title pattern (`:param` matches any
    /// segment), segment table entry for the last segment, synthesized label.
    pub fn page_title(&self, route: &AppRoute) -> String {
        if let Some(item) = self.items.iter().find(|item| item.path == route.as_str()) {
            return item.label.clone();
        }

        let segments: Vec<&str> = route.segments().collect();
        let pattern_match = self.titles.iter().find(|(pattern, _)| {
            let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
            parts.len() == segments.len()
                && parts
                    .iter()
                    .zip(&segments)
                    .all(|(part, seg)| part.starts_with(':') || part == seg)
        });
        if let Some((_, title)) = pattern_match {
            return title.clone();
        }

        match segments.last() {
            None => ROOT_LABEL.to_string(),
            Some(last) => self
                .segment(last)
                .map(|meta| meta.label.clone())
                .unwrap_or_else(|| title_case(last)),
        }
    }
}

fn has_scheme(url: &str) -> bool {
    url.split_once(':').is_some_and(|(scheme, rest)| {
        !scheme.is_empty()
            && !rest.is_empty()
            && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
