use crate::breadcrumb::BreadcrumbEntry;
use crate::profile::SiteProfile;
use crate::schema::{BreadcrumbList, ListItem};

/// Map a trail onto a `BreadcrumbList`, resolving urls against the site origin.
#[must_use]
pub fn build_breadcrumb_list(site: &SiteProfile, entries: &[BreadcrumbEntry]) -> BreadcrumbList {
    BreadcrumbList {
        item_list_element: entries
            .iter()
            .map(|entry| ListItem {
                position: entry.position,
                name: entry.name.clone(),
                item: site.absolute_url(&entry.url),
            })
            .collect(),
    }
}
