use crate::builders::{business_name, business_url, logo, non_empty, non_empty_all};
use crate::profile::{self, BusinessProfile, SiteProfile};
use crate::schema::{GeoCoordinates, LocalBusiness, OpeningHoursSpecification, PostalAddress};

/// `LocalBusiness` schema for the farm location.
#[must_use]
pub fn build_local_business(site: &SiteProfile, business: &BusinessProfile) -> LocalBusiness {
    let logo = logo(site, business);

    LocalBusiness {
        name: business_name(site, business),
        url: business_url(site, business),
        image: logo.as_ref().map(|l| l.url.clone()),
        logo,
        description: non_empty(business.description.as_deref()),
        telephone: non_empty(business.telephone.as_deref()),
        email: non_empty(business.email.as_deref()),
        price_range: non_empty(business.price_range.as_deref()),
        address: business.address.as_ref().and_then(postal_address),
        geo: business.geo.map(|geo| GeoCoordinates {
            latitude: geo.latitude,
            longitude: geo.longitude,
        }),
        opening_hours_specification: business
            .opening_hours
            .iter()
            .filter_map(opening_hours)
            .collect(),
        same_as: non_empty_all(&business.same_as),
    }
}

/// Address with blank parts dropped; `None` when nothing is left.
fn postal_address(address: &profile::PostalAddress) -> Option<PostalAddress> {
    let address = PostalAddress {
        street_address: non_empty(address.street_address.as_deref()),
        address_locality: non_empty(address.address_locality.as_deref()),
        address_region: non_empty(address.address_region.as_deref()),
        postal_code: non_empty(address.postal_code.as_deref()),
        address_country: non_empty(address.address_country.as_deref()),
    };

    let is_empty = address.street_address.is_none()
        && address.address_locality.is_none()
        && address.address_region.is_none()
        && address.postal_code.is_none()
        && address.address_country.is_none();

    (!is_empty).then_some(address)
}

/// Opening hours entry; skipped when it names no day.
fn opening_hours(hours: &profile::OpeningHours) -> Option<OpeningHoursSpecification> {
    let days = non_empty_all(&hours.days);
    if days.is_empty() {
        return None;
    }
    Some(OpeningHoursSpecification {
        day_of_week: days,
        opens: hours.opens.trim().to_owned(),
        closes: hours.closes.trim().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::profile::{GeoCoordinates as Geo, OpeningHours, PostalAddress as Address};

    fn site() -> SiteProfile {
        SiteProfile {
            name: "Greenfield Farm".to_owned(),
            url: "https://example.farm".to_owned(),
            ..Default::default()
        }
    }

    fn farm() -> BusinessProfile {
        BusinessProfile {
            name: "Greenfield Farm".to_owned(),
            url: "https://example.farm".to_owned(),
            logo: Some("/logo.png".to_owned()),
            telephone: Some("+1-802-555-0100".to_owned()),
            price_range: Some("$$".to_owned()),
            address: Some(Address {
                street_address: Some("12 Meadow Lane".to_owned()),
                address_locality: Some("Hartland".to_owned()),
                address_region: Some("VT".to_owned()),
                postal_code: Some("05048".to_owned()),
                address_country: Some("US".to_owned()),
            }),
            geo: Some(Geo {
                latitude: 43.54,
                longitude: -72.4,
            }),
            opening_hours: vec![OpeningHours {
                days: vec!["Saturday".to_owned(), "Sunday".to_owned()],
                opens: "08:00".to_owned(),
                closes: "13:00".to_owned(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_full_local_business() {
        let value = serde_json::to_value(build_local_business(&site(), &farm())).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Greenfield Farm",
                "url": "https://example.farm",
                "image": "https://example.farm/logo.png",
                "logo": {
                    "@type": "ImageObject",
                    "url": "https://example.farm/logo.png",
                    "width": 600,
                    "height": 600
                },
                "telephone": "+1-802-555-0100",
                "priceRange": "$$",
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": "12 Meadow Lane",
                    "addressLocality": "Hartland",
                    "addressRegion": "VT",
                    "postalCode": "05048",
                    "addressCountry": "US"
                },
                "geo": {
                    "@type": "GeoCoordinates",
                    "latitude": 43.54,
                    "longitude": -72.4
                },
                "openingHoursSpecification": [{
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": ["Saturday", "Sunday"],
                    "opens": "08:00",
                    "closes": "13:00"
                }]
            })
        );
    }

    #[test]
    fn test_minimal_local_business() {
        let value =
            serde_json::to_value(build_local_business(&site(), &BusinessProfile::default()))
                .unwrap();

        assert_eq!(
            value,
            json!({"name": "Greenfield Farm", "url": "https://example.farm"})
        );
    }

    #[test]
    fn test_blank_address_is_omitted() {
        let business = BusinessProfile {
            address: Some(Address {
                street_address: Some(" ".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let local = build_local_business(&site(), &business);

        assert!(local.address.is_none());
    }

    #[test]
    fn test_opening_hours_without_days_are_skipped() {
        let business = BusinessProfile {
            opening_hours: vec![
                OpeningHours {
                    days: Vec::new(),
                    opens: "09:00".to_owned(),
                    closes: "17:00".to_owned(),
                },
                OpeningHours {
                    days: vec!["Friday".to_owned()],
                    opens: " 15:00".to_owned(),
                    closes: "19:00 ".to_owned(),
                },
            ],
            ..Default::default()
        };

        let local = build_local_business(&site(), &business);

        assert_eq!(
            local.opening_hours_specification,
            vec![OpeningHoursSpecification {
                day_of_week: vec!["Friday".to_owned()],
                opens: "15:00".to_owned(),
                closes: "19:00".to_owned(),
            }]
        );
    }
}
