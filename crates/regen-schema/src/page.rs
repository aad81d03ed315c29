//! Page types and the optional data a page hands to the synthesizer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::breadcrumb::BreadcrumbLink;

/// Kind of page being described.
///
/// Unknown tags parse as [`PageType::Page`], so a mistyped front matter
/// value degrades to breadcrumb-only markup instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PageType {
    /// Generic content page.
    #[default]
    Page,
    /// Blog post, described with an `Article`.
    Blog,
    /// Recipe page, described with a `Recipe`.
    Recipe,
    /// About page.
    About,
    /// Legal text (privacy policy, terms).
    Legal,
}

impl PageType {
    /// Parse a page type tag, falling back to [`PageType::Page`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "blog" => Self::Blog,
            "recipe" => Self::Recipe,
            "about" => Self::About,
            "legal" => Self::Legal,
            "page" => Self::Page,
            other => {
                tracing::debug!(page_type = %other, "Unknown page type, treating as page");
                Self::Page
            }
        }
    }

    /// Lowercase tag for this page type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Recipe => "recipe",
            Self::About => "about",
            Self::Legal => "legal",
        }
    }
}

impl FromStr for PageType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for PageType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional data a page supplies alongside its path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    /// Blog post details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleData>,
    /// Recipe details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<RecipeData>,
    /// Explicit breadcrumb trail overriding path derivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<BreadcrumbLink>>,
}

/// Blog post details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleData {
    /// Post title.
    pub title: String,
    /// URL slug under the blog path.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    /// Last modification date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Recipe details.
///
/// Times are ISO 8601 durations such as `PT20M`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeData {
    pub name: String,
    /// URL slug under the recipes path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// Servings, e.g. "4 bowls".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Ordered preparation steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}
