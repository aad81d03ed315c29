//! Front matter extraction for Regen content pages.
//!
//! Content pages are Markdown/MDX files that start with a YAML block:
//!
//! ```text
//! ---
//! type: blog
//! title: Why We Stopped Tilling
//! author: Sam Rivera
//! date: 2024-04-02
//! tags: [soil, no-till]
//! ---
//!
//! Three seasons of no-till beds taught us...
//! ```
//!
//! [`parse_document`] splits the block from the body and
//! [`Document::page_data`] turns it into the [`PageData`](regen_schema::PageData)
//! the schema synthesizer consumes.

mod excerpt;
mod front_matter;

pub use excerpt::{first_heading, first_paragraph, truncate_description};
pub use front_matter::{
    Document, FrontMatter, MetaError, parse_document, slug_from_path, split_front_matter,
};
