use std::time::Instant;

use crate::{
    models::{NutritionTarget, QueryLayout, Recipe, UserProfile},
    services::{
        catalog::RecipeCatalog,
        filter::{exclude_allergens, filter_by_preference},
        nutrition::nutrition_target,
        recommender::{recommend, ScoredRecipe},
    },
};

/// Target and ranked recipes for one request
#[derive(Debug, Clone)]
pub struct Recommendations<'a> {
    pub target: NutritionTarget,
    pub recipes: Vec<ScoredRecipe<'a>>,
}

/// Generates meal recommendations for a user profile
///
/// Computes the profile's nutrition target, keeps the catalog recipes that
/// satisfy the diet preference and avoid every allergen, then ranks them by
/// similarity to the target. Scores live only in the returned value; the
/// catalog is never modified.
pub fn recommend_for_profile<'a>(
    catalog: &'a RecipeCatalog,
    profile: &UserProfile,
    top_n: usize,
    layout: QueryLayout,
) -> Recommendations<'a> {
    let start = Instant::now();
    let target = nutrition_target(profile);

    let all: Vec<&Recipe> = catalog.recipes().iter().collect();
    let preferred = filter_by_preference(all, profile.diet_preference);
    let preferred_count = preferred.len();
    let candidates = exclude_allergens(preferred, profile.allergens.as_slice());

    tracing::info!(
        catalog = catalog.len(),
        after_preference = preferred_count,
        candidates = candidates.len(),
        diet_preference = %profile.diet_preference,
        allergens = profile.allergens.len(),
        "Filtered recipe candidates"
    );

    let recipes = recommend(&target, &candidates, top_n, layout);

    tracing::info!(
        returned = recipes.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Ranking completed"
    );

    Recommendations { target, recipes }
}
