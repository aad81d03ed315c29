use crate::builders::{business_name, keywords, logo, non_empty, person};
use crate::page::ArticleData;
use crate::profile::{BusinessProfile, SiteProfile};
use crate::schema::{Article, Publisher, WebPage};

/// Article schema for a blog post.
///
/// The canonical url is derived from the slug under the site's blog path;
/// without a slug both `url` and `mainEntityOfPage` are left out.
#[must_use]
pub fn build_article(
    site: &SiteProfile,
    business: &BusinessProfile,
    article: &ArticleData,
) -> Article {
    let url = non_empty(Some(article.slug.as_str())).map(|slug| site.article_url(&slug));

    Article {
        headline: article.title.trim().to_owned(),
        main_entity_of_page: url.clone().map(|id| WebPage { id }),
        url,
        author: person(article.author.as_deref()),
        date_published: non_empty(article.date_published.as_deref()),
        date_modified: non_empty(article.date_modified.as_deref()),
        description: non_empty(article.description.as_deref()),
        image: non_empty(article.image.as_deref()).map(|image| site.absolute_url(&image)),
        keywords: keywords(&article.tags),
        publisher: Some(Publisher {
            name: business_name(site, business),
            logo: logo(site, business),
        })
        .filter(|p| !p.name.is_empty()),
    }
}
