use crate::builders::{business_name, business_url, logo, non_empty, non_empty_all};
use crate::profile::{BusinessProfile, SiteProfile};
use crate::schema::Organization;

/// Organization schema for the business.
///
/// `name` and `url` are always present. The logo becomes a 600×600
/// `ImageObject`; `sameAs` is emitted only when at least one profile url is
/// configured.
#[must_use]
pub fn build_organization(site: &SiteProfile, business: &BusinessProfile) -> Organization {
    Organization {
        name: business_name(site, business),
        url: business_url(site, business),
        logo: logo(site, business),
        description: non_empty(business.description.as_deref()),
        telephone: non_empty(business.telephone.as_deref()),
        email: non_empty(business.email.as_deref()),
        same_as: non_empty_all(&business.same_as),
    }
}
