use crate::builders::{keywords, non_empty, non_empty_all, person};
use crate::page::RecipeData;
use crate::profile::SiteProfile;
use crate::schema::{HowToStep, Recipe};

/// Recipe schema.
///
/// Ingredients and instructions are included only when supplied; each
/// instruction becomes a numbered `HowToStep`.
#[must_use]
pub fn build_recipe(site: &SiteProfile, recipe: &RecipeData) -> Recipe {
    Recipe {
        name: recipe.name.trim().to_owned(),
        url: non_empty(recipe.slug.as_deref()).map(|slug| site.recipe_url(&slug)),
        description: non_empty(recipe.description.as_deref()),
        author: person(recipe.author.as_deref()),
        image: non_empty(recipe.image.as_deref()).map(|image| site.absolute_url(&image)),
        date_published: non_empty(recipe.date_published.as_deref()),
        prep_time: non_empty(recipe.prep_time.as_deref()),
        cook_time: non_empty(recipe.cook_time.as_deref()),
        total_time: non_empty(recipe.total_time.as_deref()),
        recipe_yield: non_empty(recipe.recipe_yield.as_deref()),
        recipe_category: non_empty(recipe.category.as_deref()),
        recipe_cuisine: non_empty(recipe.cuisine.as_deref()),
        keywords: keywords(&recipe.keywords),
        recipe_ingredient: non_empty_all(&recipe.ingredients),
        recipe_instructions: non_empty_all(&recipe.instructions)
            .into_iter()
            .enumerate()
            .map(|(i, text)| HowToStep {
                position: i + 1,
                text,
            })
            .collect(),
    }
}
