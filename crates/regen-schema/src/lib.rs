//! Breadcrumb trails and schema.org structured data for the Regen site.
//!
//! This crate provides:
//! - [`Segmenter`]: URL path to breadcrumb trail
//! - [`SchemaSynthesizer`]: breadcrumb trail plus page data to JSON-LD
//! - Builders for `Organization`, `LocalBusiness`, `Article` and `Recipe`
//!
//! Everything here is synchronous and side-effect free. The site and
//! business profiles are injected once and shared read-only.
//!
//! # Quick Start
//!
//! ```
//! use regen_schema::{BusinessProfile, PageType, SchemaSynthesizer, Segmenter, SiteProfile};
//!
//! let site = SiteProfile {
//!     name: "Greenfield Farm".to_owned(),
//!     url: "https://example.farm".to_owned(),
//!     ..Default::default()
//! };
//! let synthesizer = SchemaSynthesizer::new(site, BusinessProfile::default());
//!
//! let trail = Segmenter::new().segment("/blog/my-post/", false);
//! assert_eq!(trail.len(), 3);
//! assert_eq!(trail[2].name, "My Post");
//!
//! let output = synthesizer
//!     .build_page_schema(PageType::Page, &trail, None, false)
//!     .expect("non-empty trail");
//! let tag = output.to_script_tag().unwrap();
//! assert!(tag.contains("BreadcrumbList"));
//! ```

mod breadcrumb;
pub mod builders;
mod page;
mod profile;
mod schema;
mod synthesizer;

pub use breadcrumb::{
    BreadcrumbEntry, BreadcrumbLink, HOME_LABEL, Segmenter, humanize, normalize_path,
};
pub use page::{ArticleData, PageData, PageType, RecipeData};
pub use profile::{BusinessProfile, GeoCoordinates, OpeningHours, PostalAddress, SiteProfile};
pub use schema::{JsonLd, LOGO_SIZE, SCHEMA_CONTEXT, SchemaGraph, SchemaObject};
pub use synthesizer::{PageOptions, SchemaSynthesizer};

/// Schema.org vocabulary types produced by the builders.
pub mod vocab {
    pub use crate::schema::{
        Article, BreadcrumbList, GeoCoordinates, HowToStep, ImageObject, ListItem, LocalBusiness,
        OpeningHoursSpecification, Organization, Person, PostalAddress, Publisher, Recipe,
        WebPage,
    };
}
