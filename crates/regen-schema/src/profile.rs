//! Site and business profiles.
//!
//! These records are read once at startup (see `regen-config`) and passed to
//! [`SchemaSynthesizer`](crate::SchemaSynthesizer). They are never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

/// Public identity of the website.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Site name.
    pub name: String,
    /// Canonical origin, e.g. `https://example.farm`. Empty keeps urls root-relative.
    pub url: String,
    /// Path prefix of blog posts.
    pub blog_path: String,
    /// Path prefix of recipes.
    pub recipes_path: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            blog_path: "/blog".to_owned(),
            recipes_path: "/recipes".to_owned(),
        }
    }
}

impl SiteProfile {
    /// Resolve `path` against the site origin.
    ///
    /// Absolute `http(s)://` urls are returned unchanged.
    ///
    /// ```
    /// use regen_schema::SiteProfile;
    ///
    /// let site = SiteProfile {
    ///     url: "https://example.farm/".to_owned(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(site.absolute_url("/blog"), "https://example.farm/blog");
    /// assert_eq!(site.absolute_url("/"), "https://example.farm/");
    /// ```
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_owned();
        }
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Canonical url of a blog post.
    #[must_use]
    pub fn article_url(&self, slug: &str) -> String {
        self.absolute_url(&join_path(&self.blog_path, slug))
    }

    /// Canonical url of a recipe.
    #[must_use]
    pub fn recipe_url(&self, slug: &str) -> String {
        self.absolute_url(&join_path(&self.recipes_path, slug))
    }
}

/// Facts about the business behind the site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    pub url: String,
    /// Logo url, absolute or root-relative.
    pub logo: Option<String>,
    pub description: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    /// Price indicator such as `$$`.
    pub price_range: Option<String>,
    /// Social profile urls.
    pub same_as: Vec<String>,
    pub address: Option<PostalAddress>,
    pub geo: Option<GeoCoordinates>,
    pub opening_hours: Vec<OpeningHours>,
}

/// Street address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
}

/// Latitude and longitude in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Opening hours shared by one or more days.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    /// Day names, e.g. `["Saturday", "Sunday"]`.
    pub days: Vec<String>,
    /// Opening time, `HH:MM`.
    pub opens: String,
    /// Closing time, `HH:MM`.
    pub closes: String,
}

/// Whether `url` carries its own scheme.
pub(crate) fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn join_path(prefix: &str, slug: &str) -> String {
    format!(
        "/{}/{}",
        prefix.trim_matches('/'),
        slug.trim_matches('/')
    )
    .replace("//", "/")
}
