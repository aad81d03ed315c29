//! Typed schema.org vocabulary and the JSON-LD output container.
//!
//! Every object serializes with its `@type` tag. Optional fields are skipped
//! when absent and list fields are skipped when empty, so the output never
//! carries `null` or `[]`.
//!
//! [`JsonLd`] is what callers embed in a page: a single object with its own
//! `@context`, or a `@graph` when a page has several objects.

use serde::{Serialize, Serializer};

/// JSON-LD context of the schema.org vocabulary.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Edge length of the logo `ImageObject`.
pub const LOGO_SIZE: u32 = 600;

/// A top-level structured-data object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum SchemaObject {
    BreadcrumbList(BreadcrumbList),
    Organization(Organization),
    LocalBusiness(LocalBusiness),
    Article(Article),
    Recipe(Recipe),
}

impl SchemaObject {
    /// The `@type` tag this object serializes with.
    #[must_use]
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::Organization(_) => "Organization",
            Self::LocalBusiness(_) => "LocalBusiness",
            Self::Article(_) => "Article",
            Self::Recipe(_) => "Recipe",
        }
    }
}

/// Structured data for one page.
///
/// Built through [`JsonLd::from_objects`], which only wraps objects in a
/// [`SchemaGraph`] when there are at least two.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonLd {
    Single(SchemaObject),
    Graph(SchemaGraph),
}

/// Several objects sharing one `@context`, in build order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaGraph {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: Vec<SchemaObject>,
}

impl SchemaGraph {
    /// Objects in build order.
    #[must_use]
    pub fn objects(&self) -> &[SchemaObject] {
        &self.graph
    }
}

/// Single object with the context prepended.
#[derive(Serialize)]
struct WithContext<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    object: &'a SchemaObject,
}

impl JsonLd {
    /// Combine objects into page output.
    ///
    /// Returns `None` for no objects, the bare object for one, and a graph
    /// preserving order for more.
    #[must_use]
    pub fn from_objects(mut objects: Vec<SchemaObject>) -> Option<Self> {
        match objects.len() {
            0 => None,
            1 => objects.pop().map(Self::Single),
            _ => Some(Self::Graph(SchemaGraph {
                context: SCHEMA_CONTEXT,
                graph: objects,
            })),
        }
    }

    /// Objects carried by this output, in build order.
    #[must_use]
    pub fn objects(&self) -> &[SchemaObject] {
        match self {
            Self::Single(object) => std::slice::from_ref(object),
            Self::Graph(graph) => graph.objects(),
        }
    }

    /// Whether the output is wrapped in a `@graph`.
    #[must_use]
    pub fn is_graph(&self) -> bool {
        matches!(self, Self::Graph(_))
    }

    /// Compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// JSON value, mostly useful for inspection and tests.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// `<script type="application/ld+json">` element embedding this output.
    ///
    /// `<`, `>` and `&` are written as unicode escapes so text inside the
    /// payload cannot terminate the script element.
    pub fn to_script_tag(&self) -> serde_json::Result<String> {
        let json = self.to_json()?;
        Ok(format!(
            "<script type=\"application/ld+json\">{}</script>",
            escape_script(&json)
        ))
    }
}

impl Serialize for JsonLd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(object) => WithContext {
                context: SCHEMA_CONTEXT,
                object,
            }
            .serialize(serializer),
            Self::Graph(graph) => graph.serialize(serializer),
        }
    }
}

fn escape_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Navigation trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

/// One step of a [`BreadcrumbList`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "ListItem")]
pub struct ListItem {
    pub position: usize,
    pub name: String,
    /// Absolute url when the site origin is known.
    pub item: String,
}

/// The business as an organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// The business as a physical location.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours_specification: Vec<OpeningHoursSpecification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

/// Recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipe_ingredient: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipe_instructions: Vec<HowToStep>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct ImageObject {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct Person {
    pub name: String,
}

/// Publishing organization nested inside an [`Article`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct Publisher {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct WebPage {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    pub day_of_week: Vec<String>,
    pub opens: String,
    pub closes: String,
}

/// One instruction of a [`Recipe`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct HowToStep {
    pub position: usize,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn breadcrumbs() -> SchemaObject {
        SchemaObject::BreadcrumbList(BreadcrumbList {
            item_list_element: vec![ListItem {
                position: 1,
                name: "Home".to_owned(),
                item: "/".to_owned(),
            }],
        })
    }

    fn organization() -> SchemaObject {
        SchemaObject::Organization(Organization {
            name: "Greenfield Farm".to_owned(),
            url: "https://example.farm".to_owned(),
            logo: None,
            description: None,
            telephone: None,
            email: None,
            same_as: Vec::new(),
        })
    }

    #[test]
    fn test_from_objects_empty_is_none() {
        assert!(JsonLd::from_objects(Vec::new()).is_none());
    }

    #[test]
    fn test_from_objects_single_is_unwrapped() {
        let output = JsonLd::from_objects(vec![breadcrumbs()]).unwrap();

        assert!(!output.is_graph());
        assert_eq!(output.objects().len(), 1);
    }

    #[test]
    fn test_from_objects_many_preserves_order() {
        let output = JsonLd::from_objects(vec![breadcrumbs(), organization()]).unwrap();

        assert!(output.is_graph());
        let types: Vec<_> = output.objects().iter().map(SchemaObject::schema_type).collect();
        assert_eq!(types, vec!["BreadcrumbList", "Organization"]);
    }

    #[test]
    fn test_single_serializes_with_context() {
        let output = JsonLd::from_objects(vec![breadcrumbs()]).unwrap();

        assert_eq!(
            output.to_value().unwrap(),
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "name": "Home", "item": "/"}
                ]
            })
        );
    }

    #[test]
    fn test_graph_serializes_context_once() {
        let output = JsonLd::from_objects(vec![breadcrumbs(), organization()]).unwrap();

        let value = output.to_value().unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        let graph = value["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0]["@type"], "BreadcrumbList");
        assert_eq!(graph[1]["@type"], "Organization");
        assert!(graph.iter().all(|node| node.get("@context").is_none()));
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let value = serde_json::to_value(organization()).unwrap();

        assert_eq!(
            value,
            json!({
                "@type": "Organization",
                "name": "Greenfield Farm",
                "url": "https://example.farm"
            })
        );
    }

    #[test]
    fn test_nested_types_are_tagged() {
        let value = serde_json::to_value(WebPage {
            id: "https://example.farm/blog/post".to_owned(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"@type": "WebPage", "@id": "https://example.farm/blog/post"})
        );

        let value = serde_json::to_value(Publisher {
            name: "Greenfield Farm".to_owned(),
            logo: None,
        })
        .unwrap();
        assert_eq!(value, json!({"@type": "Organization", "name": "Greenfield Farm"}));
    }

    #[test]
    fn test_opening_hours_field_names() {
        let value = serde_json::to_value(OpeningHoursSpecification {
            day_of_week: vec!["Saturday".to_owned()],
            opens: "08:00".to_owned(),
            closes: "13:00".to_owned(),
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Saturday"],
                "opens": "08:00",
                "closes": "13:00"
            })
        );
    }

    #[test]
    fn test_script_tag_escapes_markup() {
        let output = JsonLd::from_objects(vec![SchemaObject::BreadcrumbList(BreadcrumbList {
            item_list_element: vec![ListItem {
                position: 1,
                name: "</script><b>Eggs & Honey</b>".to_owned(),
                item: "/".to_owned(),
            }],
        })])
        .unwrap();

        let tag = output.to_script_tag().unwrap();

        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.ends_with("</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.contains("\\u003c/script\\u003e"));
        assert!(tag.contains("\\u0026"));
    }

    #[test]
    fn test_escaped_payload_still_parses() {
        let output = JsonLd::from_objects(vec![organization()]).unwrap();
        let tag = output.to_script_tag().unwrap();

        let payload = tag
            .trim_start_matches("<script type=\"application/ld+json\">")
            .trim_end_matches("</script>");
        let parsed: serde_json::Value = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed, output.to_value().unwrap());
    }
}
