//! Pure mappings from input records to schema objects.
//!
//! Builders never fail: blank or missing inputs drop the corresponding output
//! field.

mod article;
mod breadcrumb_list;
mod local_business;
mod organization;
mod recipe;

pub use article::build_article;
pub use breadcrumb_list::build_breadcrumb_list;
pub use local_business::build_local_business;
pub use organization::build_organization;
pub use recipe::build_recipe;

use crate::profile::{BusinessProfile, SiteProfile};
use crate::schema::{ImageObject, LOGO_SIZE, Person};

/// Trimmed copy of `value`, or `None` when blank.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Non-blank entries of `values`, trimmed.
pub(crate) fn non_empty_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| non_empty(Some(v.as_str())))
        .collect()
}

/// Comma-separated keywords, or `None` when there are none.
pub(crate) fn keywords(values: &[String]) -> Option<String> {
    let values = non_empty_all(values);
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Logo expanded into a square `ImageObject`.
pub(crate) fn logo(site: &SiteProfile, business: &BusinessProfile) -> Option<ImageObject> {
    non_empty(business.logo.as_deref()).map(|logo| ImageObject {
        url: site.absolute_url(&logo),
        width: LOGO_SIZE,
        height: LOGO_SIZE,
    })
}

pub(crate) fn person(name: Option<&str>) -> Option<Person> {
    non_empty(name).map(|name| Person { name })
}

/// Business url, falling back to the site origin.
pub(crate) fn business_url(site: &SiteProfile, business: &BusinessProfile) -> String {
    non_empty(Some(business.url.as_str())).unwrap_or_else(|| site.url.clone())
}

/// Business name, falling back to the site name.
pub(crate) fn business_name(site: &SiteProfile, business: &BusinessProfile) -> String {
    non_empty(Some(business.name.as_str())).unwrap_or_else(|| site.name.clone())
}
