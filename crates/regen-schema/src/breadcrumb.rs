//! Breadcrumb trails derived from URL paths.
//!
//! [`Segmenter`] turns a root-relative path such as `/blog/my-post/` into an
//! ordered trail of [`BreadcrumbEntry`] values:
//!
//! ```text
//! Home (1, "/") → Blog (2, "/blog") → My Post (3, "/blog/my-post")
//! ```
//!
//! Labels come from an override table first (known route segments such as
//! `faq`), then from humanizing the raw segment.

use std::collections::{HashMap, HashSet};

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Label of the synthetic root entry.
pub const HOME_LABEL: &str = "Home";

/// Built-in labels for route segments that humanization renders poorly.
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("about", "About Us"),
    ("csa", "CSA"),
    ("faq", "FAQ"),
    ("privacy", "Privacy Policy"),
    ("terms", "Terms of Service"),
];

/// One entry of a breadcrumb trail.
///
/// Within a trail positions are contiguous starting at 1 and urls are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    /// Display label.
    pub name: String,
    /// Root-relative or absolute link target.
    pub url: String,
    /// 1-based ordinal within the trail.
    pub position: usize,
}

/// Caller-supplied breadcrumb item that replaces automatic derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    /// Display label.
    pub name: String,
    /// Link target.
    pub url: String,
}

impl BreadcrumbLink {
    /// Create a link from a label and a target.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Derives breadcrumb trails from paths.
///
/// Holds only the label override table, so one instance can be shared
/// between threads and reused for every page.
#[derive(Clone, Debug)]
pub struct Segmenter {
    labels: HashMap<String, String>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter with the built-in label table.
    #[must_use]
    pub fn new() -> Self {
        let labels = DEFAULT_LABELS
            .iter()
            .map(|(segment, label)| ((*segment).to_owned(), (*label).to_owned()))
            .collect();
        Self { labels }
    }

    /// Layer additional labels over the current table.
    ///
    /// Keys are raw path segments; a key already present is replaced.
    #[must_use]
    pub fn with_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Display label for a single raw path segment.
    #[must_use]
    pub fn label(&self, segment: &str) -> String {
        if let Some(label) = self.labels.get(segment).filter(|l| !l.trim().is_empty()) {
            return label.clone();
        }

        let decoded = percent_decode_str(segment).decode_utf8_lossy();
        let label = humanize(&decoded);
        if !label.is_empty() {
            label
        } else if decoded.trim().is_empty() {
            // `%20` and friends: the encoded text is the only visible name
            segment.to_owned()
        } else {
            decoded.into_owned()
        }
    }

    /// Derive the breadcrumb trail for `path`.
    ///
    /// Non-root paths get a leading `Home` entry. The root path yields an
    /// empty trail unless `show_on_home` is set, in which case it yields the
    /// `Home` entry alone.
    #[must_use]
    pub fn segment(&self, path: &str, show_on_home: bool) -> Vec<BreadcrumbEntry> {
        let segments = path_segments(path);
        if segments.is_empty() {
            return if show_on_home {
                vec![home_entry()]
            } else {
                Vec::new()
            };
        }

        let mut entries = Vec::with_capacity(segments.len() + 1);
        entries.push(home_entry());

        let mut url = String::new();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
            let position = entries.len() + 1;
            entries.push(BreadcrumbEntry {
                name: self.label(segment),
                url: url.clone(),
                position,
            });
        }

        entries
    }

    /// Convert explicit links into a trail.
    ///
    /// Links with a blank name are dropped. When several links share a url
    /// only the last one is kept, so the trail still ends on the final
    /// link. Positions are assigned after filtering.
    #[must_use]
    pub fn from_links(links: &[BreadcrumbLink]) -> Vec<BreadcrumbEntry> {
        let mut seen = HashSet::new();
        let mut kept: Vec<&BreadcrumbLink> = links
            .iter()
            .rev()
            .filter(|link| !link.name.trim().is_empty() && seen.insert(link.url.as_str()))
            .collect();
        kept.reverse();

        kept.into_iter()
            .enumerate()
            .map(|(i, link)| BreadcrumbEntry {
                name: link.name.clone(),
                url: link.url.clone(),
                position: i + 1,
            })
            .collect()
    }

    /// Trail for a page, preferring explicit links over derivation.
    ///
    /// Falls back to [`Segmenter::segment`] when `links` is absent or
    /// contains no usable entry.
    #[must_use]
    pub fn trail(
        &self,
        path: &str,
        links: Option<&[BreadcrumbLink]>,
        show_on_home: bool,
    ) -> Vec<BreadcrumbEntry> {
        if let Some(links) = links {
            let entries = Self::from_links(links);
            if !entries.is_empty() {
                return entries;
            }
        }
        self.segment(path, show_on_home)
    }
}

/// Normalize a path to its canonical root-relative form.
///
/// `/blog/my-post/`, `blog/my-post` and `//blog//my-post` all become
/// `/blog/my-post`; anything without segments becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let segments = path_segments(path);
    if segments.is_empty() {
        return "/".to_owned();
    }
    let mut normalized = String::with_capacity(path.len());
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}

/// Turn a path segment into a display label.
///
/// Hyphens, underscores and whitespace separate words; each word gets an
/// uppercase first letter.
///
/// ```
/// use regen_schema::humanize;
///
/// assert_eq!(humanize("my-post"), "My Post");
/// assert_eq!(humanize("cover_crops"), "Cover Crops");
/// ```
#[must_use]
pub fn humanize(segment: &str) -> String {
    segment
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a path into its meaningful segments.
///
/// Query strings and fragments are dropped, as are blank, `.` and `..`
/// segments.
fn path_segments(path: &str) -> Vec<&str> {
    let path = path.trim().split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.trim().is_empty() && *s != "." && *s != "..")
        .collect();

    if segments.is_empty() && !path.trim_matches('/').is_empty() {
        tracing::debug!(path = %path, "Path collapsed to no segments");
    }
    segments
}

fn home_entry() -> BreadcrumbEntry {
    BreadcrumbEntry {
        name: HOME_LABEL.to_owned(),
        url: "/".to_owned(),
        position: 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(name: &str, url: &str, position: usize) -> BreadcrumbEntry {
        BreadcrumbEntry {
            name: name.to_owned(),
            url: url.to_owned(),
            position,
        }
    }

    #[test]
    fn test_segment_blog_post() {
        let trail = Segmenter::new().segment("/blog/my-post/", false);

        assert_eq!(
            trail,
            vec![
                entry("Home", "/", 1),
                entry("Blog", "/blog", 2),
                entry("My Post", "/blog/my-post", 3),
            ]
        );
    }

    #[test]
    fn test_segment_trailing_slash_is_irrelevant() {
        let segmenter = Segmenter::new();

        assert_eq!(
            segmenter.segment("/a/b/", false),
            segmenter.segment("/a/b", false)
        );
        assert_eq!(
            segmenter.segment("a/b", false),
            segmenter.segment("/a/b", false)
        );
    }

    #[test]
    fn test_segment_root_without_flag_is_empty() {
        let segmenter = Segmenter::new();

        assert!(segmenter.segment("/", false).is_empty());
        assert!(segmenter.segment("", false).is_empty());
    }

    #[test]
    fn test_segment_root_with_flag_is_home_only() {
        let trail = Segmenter::new().segment("/", true);

        assert_eq!(trail, vec![entry("Home", "/", 1)]);
    }

    #[test]
    fn test_segment_flag_ignored_for_non_root() {
        let segmenter = Segmenter::new();

        assert_eq!(
            segmenter.segment("/recipes", true),
            segmenter.segment("/recipes", false)
        );
    }

    #[test]
    fn test_segment_collapses_empty_segments() {
        let trail = Segmenter::new().segment("//blog///my-post//", false);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].url, "/blog/my-post");
    }

    #[test]
    fn test_segment_skips_dot_segments() {
        let trail = Segmenter::new().segment("/./blog/../post", false);

        let urls: Vec<_> = trail.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/blog", "/blog/post"]);
    }

    #[test]
    fn test_segment_only_slashes_and_dots_is_root() {
        let segmenter = Segmenter::new();

        assert!(segmenter.segment("///./..//", false).is_empty());
        assert_eq!(segmenter.segment("///", true).len(), 1);
    }

    #[test]
    fn test_segment_drops_query_and_fragment() {
        let trail = Segmenter::new().segment("/recipes/nettle-soup?print=1#steps", false);

        assert_eq!(trail.last().unwrap().url, "/recipes/nettle-soup");
        assert_eq!(trail.last().unwrap().name, "Nettle Soup");
    }

    #[test]
    fn test_segment_positions_are_contiguous() {
        let trail = Segmenter::new().segment("/a/b/c/d/e", false);

        let positions: Vec<_> = trail.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_segment_urls_are_unique_and_names_non_empty() {
        let trail = Segmenter::new().segment("/blog/blog/---/blog", false);

        let urls: HashSet<_> = trail.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls.len(), trail.len());
        assert!(trail.iter().all(|e| !e.name.trim().is_empty()));
    }

    #[test]
    fn test_label_whitespace_segment() {
        let trail = Segmenter::new().segment("/a/%20/b", false);

        assert!(trail.iter().all(|e| !e.name.trim().is_empty()));
        assert_eq!(trail[2], entry("%20", "/a/%20", 3));
        assert_eq!(Segmenter::new().label("%09%20"), "%09%20");
    }

    #[test]
    fn test_segment_skips_literal_whitespace_segments() {
        let trail = Segmenter::new().segment("/a/ /b", false);

        assert_eq!(
            trail,
            vec![entry("Home", "/", 1), entry("A", "/a", 2), entry("B", "/a/b", 3)]
        );
    }

    #[test]
    fn test_segment_last_url_matches_normalized_path() {
        let segmenter = Segmenter::new();
        for path in [
            "/blog/my-post/",
            "/recipes",
            "about/",
            "//legal//privacy",
            "/a/b/c",
        ] {
            let trail = segmenter.segment(path, false);
            assert_eq!(trail.last().unwrap().url, normalize_path(path), "{path}");
        }
    }

    #[test]
    fn test_label_uses_default_override() {
        let segmenter = Segmenter::new();

        assert_eq!(segmenter.label("faq"), "FAQ");
        assert_eq!(segmenter.label("about"), "About Us");
    }

    #[test]
    fn test_label_custom_override_wins() {
        let segmenter = Segmenter::new().with_labels([("csa", "CSA Shares"), ("shop", "Farm Store")]);

        assert_eq!(segmenter.label("csa"), "CSA Shares");
        assert_eq!(segmenter.label("shop"), "Farm Store");
        assert_eq!(segmenter.label("faq"), "FAQ");
    }

    #[test]
    fn test_label_blank_override_falls_back_to_humanize() {
        let segmenter = Segmenter::new().with_labels([("cover-crops", " ")]);

        assert_eq!(segmenter.label("cover-crops"), "Cover Crops");
    }

    #[test]
    fn test_label_percent_decoded() {
        let segmenter = Segmenter::new();

        assert_eq!(segmenter.label("caf%C3%A9-menu"), "Café Menu");
        assert_eq!(segmenter.label("spring%20planting"), "Spring Planting");
    }

    #[test]
    fn test_label_unlabelable_segment_keeps_raw_text() {
        assert_eq!(Segmenter::new().label("--"), "--");
    }

    #[test]
    fn test_humanize_mixed_separators() {
        assert_eq!(humanize("no_till-gardening"), "No Till Gardening");
        assert_eq!(humanize("2024-harvest"), "2024 Harvest");
        assert_eq!(humanize("already Title"), "Already Title");
    }

    #[test]
    fn test_humanize_keeps_inner_case() {
        assert_eq!(humanize("iPhone-tips"), "IPhone Tips");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/blog/my-post/"), "/blog/my-post");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("blog"), "/blog");
    }

    #[test]
    fn test_from_links_assigns_positions() {
        let links = vec![
            BreadcrumbLink::new("Home", "/"),
            BreadcrumbLink::new("Recipes", "/recipes"),
            BreadcrumbLink::new("Nettle Soup", "/recipes/nettle-soup"),
        ];

        let trail = Segmenter::from_links(&links);

        assert_eq!(
            trail,
            vec![
                entry("Home", "/", 1),
                entry("Recipes", "/recipes", 2),
                entry("Nettle Soup", "/recipes/nettle-soup", 3),
            ]
        );
    }

    #[test]
    fn test_from_links_drops_blank_and_duplicate() {
        let links = vec![
            BreadcrumbLink::new("Home", "/"),
            BreadcrumbLink::new("  ", "/blank"),
            BreadcrumbLink::new("Again", "/"),
            BreadcrumbLink::new("Blog", "/blog"),
        ];

        let trail = Segmenter::from_links(&links);

        assert_eq!(trail, vec![entry("Again", "/", 1), entry("Blog", "/blog", 2)]);
    }

    #[test]
    fn test_from_links_duplicate_keeps_last_link() {
        let links = vec![
            BreadcrumbLink::new("Home", "/"),
            BreadcrumbLink::new("Blog", "/blog"),
            BreadcrumbLink::new("Recipes", "/recipes"),
            BreadcrumbLink::new("Journal", "/blog"),
        ];

        let trail = Segmenter::from_links(&links);

        assert_eq!(
            trail,
            vec![
                entry("Home", "/", 1),
                entry("Recipes", "/recipes", 2),
                entry("Journal", "/blog", 3),
            ]
        );
        assert_eq!(trail.last().map(|e| e.url.as_str()), Some("/blog"));
    }

    #[test]
    fn test_trail_prefers_links() {
        let links = vec![BreadcrumbLink::new("Start", "/start")];

        let trail = Segmenter::new().trail("/blog/post", Some(&links), false);

        assert_eq!(trail, vec![entry("Start", "/start", 1)]);
    }

    #[test]
    fn test_trail_falls_back_when_links_unusable() {
        let links = vec![BreadcrumbLink::new("", "/nowhere")];
        let segmenter = Segmenter::new();

        assert_eq!(
            segmenter.trail("/blog", Some(&links), false),
            segmenter.segment("/blog", false)
        );
        assert_eq!(
            segmenter.trail("/blog", Some(&[]), false),
            segmenter.segment("/blog", false)
        );
        assert_eq!(
            segmenter.trail("/blog", None, false),
            segmenter.segment("/blog", false)
        );
    }

    #[test]
    fn test_breadcrumb_entry_serialization() {
        let json = serde_json::to_value(entry("Blog", "/blog", 2)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Blog", "url": "/blog", "position": 2})
        );
    }
}
