//! Breadcrumb trail construction and overflow collapsing.
//!
//! Both operations are pure: [`build`] maps a route path to a fresh trail,
//! [`collapse`] splits a trail into visible and overflow crumbs.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::breadcrumbs::{ROOT_LABEL, ROOT_PATH};
use crate::core::catalog::NavCatalog;
use crate::models::{AppRoute, BreadcrumbEntry, CollapsedCrumbs, IconRef};

static UUID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is valid")
});

/// The root crumb every trail starts with.
pub fn root_entry() -> BreadcrumbEntry {
    BreadcrumbEntry::new(ROOT_PATH, ROOT_LABEL, IconRef::Home)
}

/// Build the breadcrumb trail for a route path.
///
/// The result always starts with the root "Home" crumb and ends with the
/// crumb for `path` itself. Segments missing from the catalog's segment
/// table get a title-cased label; a final segment shaped like a UUID or a
/// number is marked `disabled` since it has no page of its own to link to.
pub fn build(path: &str, catalog: &NavCatalog) -> Vec<BreadcrumbEntry> {
    let route = AppRoute::parse(path);
    let segments: Vec<&str> = route.segments().collect();

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(root_entry());

    let mut current = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        current.push('/');
        current.push_str(segment);
        let is_last = idx == segments.len() - 1;

        let entry = match catalog.segment(segment) {
            Some(meta) => BreadcrumbEntry {
                path: current.clone(),
                label: meta.label.clone(),
                icon_ref: meta.icon,
                badge: meta.badge.clone(),
                disabled: false,
            },
            None => BreadcrumbEntry {
                path: current.clone(),
                label: title_case(segment),
                icon_ref: IconRef::FileText,
                badge: None,
                disabled: is_last && is_dynamic_id(segment),
            },
        };
        trail.push(entry);
    }

    trail
}

/// Apply the overflow collapsing policy.
///
/// Trails of at most `max_visible` crumbs are shown whole. Longer trails keep
/// the first crumb and the last `max_visible - 1` crumbs; the rest move into
/// the overflow menu. At least first and last crumb stay visible whatever
/// `max_visible` is.
pub fn collapse(entries: &[BreadcrumbEntry], max_visible: usize) -> CollapsedCrumbs {
    if entries.len() <= max_visible.max(2) {
        return CollapsedCrumbs {
            visible: entries.to_vec(),
            collapsed: Vec::new(),
        };
    }

    let keep_end = max_visible.saturating_sub(1).max(1);
    let split = entries.len() - keep_end;

    let mut visible = Vec::with_capacity(keep_end + 1);
    visible.push(entries[0].clone());
    visible.extend_from_slice(&entries[split..]);

    CollapsedCrumbs {
        visible,
        collapsed: entries[1..split].to_vec(),
    }
}

/// Title-case a hyphen-separated slug (`my-first-post` -> `My First Post`).
pub fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether a segment looks like a generated identifier (UUID or pure number).
pub fn is_dynamic_id(segment: &str) -> bool {
    let numeric = !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit());
    numeric || UUID_SHAPE.is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> NavCatalog {
        NavCatalog::embedded()
    }

    fn trail_of(len: usize) -> Vec<BreadcrumbEntry> {
        (0..len)
            .map(|i| BreadcrumbEntry::new(format!("/{}", i), format!("Crumb {}", i), IconRef::FileText))
            .collect()
    }

    #[test]
    fn test_root_always_present() {
        let catalog = catalog();
        for path in ["", "/", "/about", "/blog/my-first-post", "//x//y", "/a/b/c/d/e/f"] {
            let trail = build(path, &catalog);
            assert!(!trail.is_empty(), "empty trail for {path:?}");
            assert_eq!(trail[0].path, "/");
            assert_eq!(trail[0].label, "Home");
        }
        assert_eq!(build("/", &catalog), vec![root_entry()]);
    }

    #[test]
    fn test_known_segment_badges() {
        let catalog = catalog();

        let projects = build("/projects", &catalog);
        assert_eq!(projects[1].badge.as_deref(), Some("12"));
        assert_eq!(projects[1].icon_ref, IconRef::Briefcase);

        let nested = build("/projects/42", &catalog);
        assert_eq!(nested[1].badge.as_deref(), Some("12"));

        assert_eq!(build("/data-stories", &catalog)[1].badge.as_deref(), Some("New"));
        assert_eq!(build("/playground", &catalog)[1].badge.as_deref(), Some("Live"));
        assert_eq!(build("/about", &catalog)[1].badge, None);
    }

    #[test]
    fn test_blog_slug() {
        let trail = build("/blog/my-first-post", &catalog());
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].path, "/blog");
        assert_eq!(trail[1].label, "Blog");
        assert_eq!(trail[2].path, "/blog/my-first-post");
        assert_eq!(trail[2].label, "My First Post");
        assert!(!trail[2].disabled);
        assert_eq!(trail[2].icon_ref, IconRef::FileText);
    }

    #[test]
    fn test_dynamic_final_segment_disabled() {
        let catalog = catalog();

        let uuid = build("/blog/550e8400-e29b-41d4-a716-446655440000", &catalog);
        assert!(uuid.last().unwrap().disabled);

        let numeric = build("/projects/42", &catalog);
        assert!(numeric.last().unwrap().disabled);
        assert_eq!(numeric.last().unwrap().label, "42");
    }

    #[test]
    fn test_dynamic_middle_segment_not_disabled() {
        let trail = build("/projects/42/notes", &catalog());
        assert!(!trail[2].disabled);
        assert!(!trail[3].disabled);
    }

    #[test]
    fn test_not_found_segment() {
        let trail = build("/404", &catalog());
        assert_eq!(trail[1].label, "Not Found");
        assert_eq!(trail[1].icon_ref, IconRef::AlertTriangle);
    }

    #[test]
    fn test_unknown_segment_on_empty_catalog() {
        let trail = build("/about", &NavCatalog::default());
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].label, "About");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("my-first-post"), "My First Post");
        assert_eq!(title_case("hello"), "Hello");
        assert_eq!(title_case("double--dash"), "Double Dash");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_is_dynamic_id() {
        assert!(is_dynamic_id("42"));
        assert!(is_dynamic_id("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_dynamic_id("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!is_dynamic_id("my-first-post"));
        assert!(!is_dynamic_id("42a"));
        assert!(!is_dynamic_id(""));
        assert!(!is_dynamic_id("550e8400-e29b-41d4-a716"));
    }

    #[test]
    fn test_collapse_seven_into_four() {
        let trail = trail_of(7);
        let crumbs = collapse(&trail, 4);
        assert_eq!(
            crumbs.visible,
            vec![trail[0].clone(), trail[4].clone(), trail[5].clone(), trail[6].clone()]
        );
        assert_eq!(crumbs.collapsed, trail[1..4].to_vec());
        assert!(crumbs.has_overflow());
    }

    #[test]
    fn test_collapse_fits() {
        let trail = trail_of(4);
        let crumbs = collapse(&trail, 4);
        assert_eq!(crumbs.visible, trail);
        assert!(crumbs.collapsed.is_empty());
        assert!(!crumbs.has_overflow());
    }

    #[test]
    fn test_collapse_small_capacity() {
        let trail = trail_of(5);
        for max_visible in [0, 1, 2] {
            let crumbs = collapse(&trail, max_visible);
            assert_eq!(crumbs.visible, vec![trail[0].clone(), trail[4].clone()]);
            assert_eq!(crumbs.collapsed, trail[1..4].to_vec());
        }

        let single = trail_of(1);
        assert_eq!(collapse(&single, 0).visible, single);
        let pair = trail_of(2);
        assert_eq!(collapse(&pair, 1).visible, pair);
    }
}
