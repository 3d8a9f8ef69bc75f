//! Route cleaning and the route -> menu section table.

use serde::{Deserialize, Serialize};

/// A menu section that opens automatically while the current route belongs
/// to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSection {
    /// Exact title of the expandable menu entry.
    pub section_title: String,
    /// Route names owned by the section, without a leading slash.
    pub route_prefixes: Vec<String>,
}

impl RouteSection {
    pub fn new(
        section_title: impl Into<String>,
        route_prefixes: &[&str],
    ) -> Self {
        Self {
            section_title: section_title.into(),
            route_prefixes: route_prefixes
                .iter()
                .map(|route| route.to_string())
                .collect(),
        }
    }

    /// Whether a cleaned path is one of this section's routes or below one.
    pub fn matches(&self, clean_path: &str) -> bool {
        self.route_prefixes
            .iter()
            .any(|route| route_matches(clean_path, route))
    }
}

pub const REPORTS_SECTION: &str = "Reports Section";
pub const MASTER_SECTION: &str = "Master Section";

const REPORT_ROUTES: &[&str] = &[
    "referralReport",
    "testimonialReport",
    "oneTooneReport",
    "tyfcb",
    "VisitorsReport",
    "askManagement",
    "pointHistory",
    "attendanceRecord",
    "taskHistory",
    "fees",
];

const MASTER_ROUTES: &[&str] =
    &["country", "states", "city", "chapter", "category", "subcategory"];

/// The dashboard's section table. Order matters: when several rows match,
/// the later one wins.
pub fn default_sections() -> Vec<RouteSection> {
    vec![
        RouteSection::new(REPORTS_SECTION, REPORT_ROUTES),
        RouteSection::new(MASTER_SECTION, MASTER_ROUTES),
    ]
}

/// Strip the query string and a single leading slash from a router URL.
pub fn clean_path(url: &str) -> &str {
    let path = url.split('?').next().unwrap_or_default();
    path.strip_prefix('/').unwrap_or(path)
}

/// Exact match, or a sub-path of `route`.
pub fn route_matches(clean_path: &str, route: &str) -> bool {
    match clean_path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/referralReport"), "referralReport");
        assert_eq!(
            clean_path("referralReport/details?x=1"),
            "referralReport/details"
        );
        assert_eq!(clean_path("/country?page=2&q=a?b"), "country");
        assert_eq!(clean_path("/"), "");
        assert_eq!(clean_path(""), "");
        assert_eq!(clean_path("?only=query"), "");
        // only one leading slash is removed
        assert_eq!(clean_path("//city"), "/city");
    }

    #[test]
    fn test_route_matches() {
        assert!(route_matches("tyfcb", "tyfcb"));
        assert!(route_matches("tyfcb/12", "tyfcb"));
        assert!(!route_matches("tyfcbExtra", "tyfcb"));
        assert!(!route_matches("Tyfcb", "tyfcb"));
        assert!(!route_matches("", "tyfcb"));
        // category must not swallow subcategory and vice versa
        assert!(!route_matches("subcategory", "category"));
        assert!(route_matches("subcategory/4", "subcategory"));
    }

    #[test]
    fn test_default_sections_are_disjoint() {
        let sections = default_sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].section_title, REPORTS_SECTION);
        assert_eq!(sections[0].route_prefixes.len(), 10);
        assert_eq!(sections[1].section_title, MASTER_SECTION);
        assert_eq!(sections[1].route_prefixes.len(), 6);

        for route in &sections[0].route_prefixes {
            assert!(!sections[1].matches(route), "{route} in both sections");
        }
    }

    #[test]
    fn test_section_matches() {
        let sections = default_sections();
        assert!(sections[0].matches("VisitorsReport"));
        assert!(!sections[0].matches("visitorsReport"));
        assert!(sections[1].matches("states/CA"));
        assert!(!sections[1].matches("dashboard"));
    }
}
