//! Page-level structured data.
//!
//! [`SchemaSynthesizer`] combines a breadcrumb trail, the optional
//! `LocalBusiness` object and the page-type specific object into the
//! [`JsonLd`] a page embeds. Objects are always produced in the same order:
//! breadcrumbs, local business, then the page object.

use crate::breadcrumb::{BreadcrumbEntry, Segmenter};
use crate::builders::{
    build_article, build_breadcrumb_list, build_local_business, build_organization, build_recipe,
};
use crate::page::{PageData, PageType};
use crate::profile::{BusinessProfile, SiteProfile};
use crate::schema::{JsonLd, SchemaObject};

/// Per-page switches for [`SchemaSynthesizer::build_for_path`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Append the `LocalBusiness` object.
    pub include_local_business: bool,
    /// Emit a `Home`-only trail on the root path.
    pub show_on_home: bool,
}

/// Builds structured data for pages.
///
/// Holds the site and business profiles it was constructed with and nothing
/// else; every build is a pure function of its arguments and those profiles.
#[derive(Clone, Debug, Default)]
pub struct SchemaSynthesizer {
    site: SiteProfile,
    business: BusinessProfile,
}

impl SchemaSynthesizer {
    /// Create a synthesizer for the given profiles.
    #[must_use]
    pub fn new(site: SiteProfile, business: BusinessProfile) -> Self {
        Self { site, business }
    }

    /// Site profile in use.
    #[must_use]
    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Business profile in use.
    #[must_use]
    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    /// Structured data for one page.
    ///
    /// Returns `None` when there is nothing to emit (empty trail, no local
    /// business, no page object). Missing page data never fails the build;
    /// the page object is simply left out.
    ///
    /// An empty trail produces no `BreadcrumbList`, so a root page with
    /// `include_local_business` yields a single `LocalBusiness` object
    /// rather than a graph.
    #[must_use]
    pub fn build_page_schema(
        &self,
        page_type: PageType,
        breadcrumbs: &[BreadcrumbEntry],
        data: Option<&PageData>,
        include_local_business: bool,
    ) -> Option<JsonLd> {
        let mut objects = Vec::with_capacity(3);

        if !breadcrumbs.is_empty() {
            objects.push(SchemaObject::BreadcrumbList(build_breadcrumb_list(
                &self.site,
                breadcrumbs,
            )));
        }

        if include_local_business {
            objects.push(SchemaObject::LocalBusiness(build_local_business(
                &self.site,
                &self.business,
            )));
        }

        if let Some(object) = self.page_object(page_type, data) {
            objects.push(object);
        }

        JsonLd::from_objects(objects)
    }

    /// Derive the trail for `path` and build the page's structured data.
    ///
    /// Explicit breadcrumbs in `data` take precedence over the path.
    #[must_use]
    pub fn build_for_path(
        &self,
        segmenter: &Segmenter,
        path: &str,
        page_type: PageType,
        data: Option<&PageData>,
        options: PageOptions,
    ) -> Option<JsonLd> {
        let links = data.and_then(|d| d.breadcrumbs.as_deref());
        let trail = segmenter.trail(path, links, options.show_on_home);
        self.build_page_schema(page_type, &trail, data, options.include_local_business)
    }

    /// Site-wide `Organization` object.
    #[must_use]
    pub fn build_organization(&self) -> JsonLd {
        JsonLd::Single(SchemaObject::Organization(build_organization(
            &self.site,
            &self.business,
        )))
    }

    /// Stand-alone `LocalBusiness` object.
    #[must_use]
    pub fn build_local_business(&self) -> JsonLd {
        JsonLd::Single(SchemaObject::LocalBusiness(build_local_business(
            &self.site,
            &self.business,
        )))
    }

    fn page_object(&self, page_type: PageType, data: Option<&PageData>) -> Option<SchemaObject> {
        match page_type {
            PageType::Blog => {
                let Some(article) = data.and_then(|d| d.article.as_ref()) else {
                    tracing::debug!("Blog page without article data, skipping Article");
                    return None;
                };
                Some(SchemaObject::Article(build_article(
                    &self.site,
                    &self.business,
                    article,
                )))
            }
            PageType::Recipe => {
                let Some(recipe) = data.and_then(|d| d.recipe.as_ref()) else {
                    tracing::debug!("Recipe page without recipe data, skipping Recipe");
                    return None;
                };
                Some(SchemaObject::Recipe(build_recipe(&self.site, recipe)))
            }
            PageType::Page | PageType::About | PageType::Legal => None,
        }
    }
}
