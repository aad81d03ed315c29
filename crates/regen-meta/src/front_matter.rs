//! YAML front matter at the top of Markdown/MDX pages.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use regen_schema::{ArticleData, BreadcrumbLink, PageData, PageType, RecipeData, humanize};
use serde::{Deserialize, Serialize};

use crate::excerpt::{DESCRIPTION_MAX_CHARS, first_heading, first_paragraph, truncate_description};

/// Leading `---` fenced block; group 1 is the YAML.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\x{feff}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Page fields declared in front matter.
///
/// Every field is optional. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Page category; unknown values read as [`PageType::Page`].
    #[serde(rename = "type")]
    pub page_type: PageType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Url slug; defaults to the file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date.
    #[serde(alias = "date_published", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Last modification date.
    #[serde(alias = "date_modified", skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,

    #[serde(alias = "yield", skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,

    #[serde(alias = "steps", skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,

    /// Explicit trail replacing path derivation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<BreadcrumbLink>>,

    /// Whether to emit the `LocalBusiness` object on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_business: Option<bool>,
}

impl FrontMatter {
    /// Parse front matter from the YAML between the fences.
    ///
    /// Blank content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, MetaError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(|e| MetaError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Build synthesizer input for this page.
    ///
    /// `fallback_slug` is used when no `slug` is declared. Blog pages get
    /// [`ArticleData`], recipe pages get [`RecipeData`]; other types carry
    /// only the breadcrumb override.
    #[must_use]
    pub fn page_data(&self, fallback_slug: &str) -> PageData {
        let slug = self
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback_slug)
            .to_owned();
        let title = self
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| humanize(&slug));

        let mut data = PageData {
            breadcrumbs: self.breadcrumbs.clone(),
            ..Default::default()
        };

        match self.page_type {
            PageType::Blog => {
                data.article = Some(ArticleData {
                    title,
                    slug,
                    author: self.author.clone(),
                    date_published: self.date.clone(),
                    date_modified: self.updated.clone(),
                    description: self.description.clone(),
                    image: self.image.clone(),
                    tags: self.tags.clone(),
                });
            }
            PageType::Recipe => {
                data.recipe = Some(RecipeData {
                    name: title,
                    slug: Some(slug),
                    description: self.description.clone(),
                    author: self.author.clone(),
                    image: self.image.clone(),
                    date_published: self.date.clone(),
                    prep_time: self.prep_time.clone(),
                    cook_time: self.cook_time.clone(),
                    total_time: self.total_time.clone(),
                    recipe_yield: self.recipe_yield.clone(),
                    category: self.category.clone(),
                    cuisine: self.cuisine.clone(),
                    ingredients: self.ingredients.clone(),
                    instructions: self.instructions.clone(),
                    keywords: self.tags.clone(),
                });
            }
            PageType::Page | PageType::About | PageType::Legal => {}
        }

        data
    }
}

/// A page split into front matter and body.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'a> {
    pub front_matter: FrontMatter,
    /// Source text after the closing fence.
    pub body: &'a str,
}

impl Document<'_> {
    /// Build synthesizer input, filling gaps from the body.
    ///
    /// A missing title falls back to the first `# heading`, a missing
    /// description to the first paragraph.
    #[must_use]
    pub fn page_data(&self, fallback_slug: &str) -> PageData {
        let mut front_matter = self.front_matter.clone();

        if is_blank(front_matter.title.as_deref()) {
            front_matter.title = first_heading(self.body);
        }
        if is_blank(front_matter.description.as_deref()) {
            front_matter.description = first_paragraph(self.body)
                .map(|p| truncate_description(&p, DESCRIPTION_MAX_CHARS));
        }

        front_matter.page_data(fallback_slug)
    }
}

/// Split `source` into front matter and body.
///
/// A source without a leading `---` fence has default front matter and the
/// whole text as body.
///
/// # Errors
///
/// Returns an error if the fenced block is not valid YAML.
pub fn parse_document(source: &str) -> Result<Document<'_>, MetaError> {
    let (yaml, body) = split_front_matter(source);
    let front_matter = match yaml {
        Some(yaml) => FrontMatter::from_yaml(yaml)?,
        None => {
            tracing::debug!("No front matter fence");
            FrontMatter::default()
        }
    };

    Ok(Document { front_matter, body })
}

/// Split `source` at the closing fence without parsing the YAML.
///
/// Returns the fenced block, if any, and the body after it.
#[must_use]
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let Some(caps) = FENCE.captures(source) else {
        return (None, source.trim_start_matches('\u{feff}'));
    };

    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let end = caps.get(0).map_or(0, |m| m.end());
    (Some(yaml), &source[end..])
}

/// Default slug for a content file.
///
/// `blog/soil-health.mdx` gives `soil-health`; `blog/soil-health/index.md`
/// gives the directory name.
#[must_use]
pub fn slug_from_path(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    if stem == "index" {
        if let Some(dir) = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
        {
            return dir.to_owned();
        }
    }
    stem.to_owned()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Error type for front matter operations.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}
