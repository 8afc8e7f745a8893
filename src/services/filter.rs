use crate::models::{DietPreference, Recipe};

/// Keeps recipes whose instructions mention the preference keyword.
///
/// `Unrestricted` keeps everything. Recipes with empty instructions never
/// match a keyword.
pub fn filter_by_preference<'a>(
    recipes: Vec<&'a Recipe>,
    preference: DietPreference,
) -> Vec<&'a Recipe> {
    let Some(keyword) = preference.keyword() else {
        return recipes;
    };

    recipes
        .into_iter()
        .filter(|recipe| recipe.instructions_mention(keyword))
        .collect()
}

/// Drops recipes whose instructions mention any of the allergens.
///
/// Allergens are trimmed and lowercased once; blank tokens are ignored.
pub fn exclude_allergens<'a, S>(recipes: Vec<&'a Recipe>, allergens: &[S]) -> Vec<&'a Recipe>
where
    S: AsRef<str>,
{
    let allergens: Vec<String> = allergens
        .iter()
        .map(|a| a.as_ref().trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if allergens.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| !recipe.instructions_mention_any(allergens.as_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;

    fn recipe(name: &str, instructions: &str) -> Recipe {
        Recipe::new(
            name.to_string(),
            NutrientProfile::default(),
            instructions.to_string(),
        )
    }

    fn fixture() -> Vec<Recipe> {
        vec![
            recipe("lentil soup", "Simmer lentils Vegan and vegetarian friendly"),
            recipe("peanut noodles", "Toss noodles with peanut sauce vegetarian"),
            recipe("steak", "Sear the steak in butter"),
            recipe("mystery", ""),
        ]
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_unrestricted_is_identity() {
        let recipes = fixture();
        let all: Vec<&Recipe> = recipes.iter().collect();
        let kept = filter_by_preference(all.clone(), DietPreference::Unrestricted);
        assert_eq!(kept, all);
    }

    #[test]
    fn test_vegetarian_keeps_mentions_only() {
        let recipes = fixture();
        let kept = filter_by_preference(recipes.iter().collect(), DietPreference::Vegetarian);
        assert_eq!(names(&kept), vec!["lentil soup", "peanut noodles"]);
    }

    #[test]
    fn test_vegan_is_case_insensitive_and_skips_empty_instructions() {
        let recipes = fixture();
        let kept = filter_by_preference(recipes.iter().collect(), DietPreference::Vegan);
        assert_eq!(names(&kept), vec!["lentil soup"]);
    }

    #[test]
    fn test_exclude_allergens() {
        let recipes = fixture();
        let kept = exclude_allergens(recipes.iter().collect(), &[" Peanut ", "BUTTER"]);
        assert_eq!(names(&kept), vec!["lentil soup", "mystery"]);
    }

    #[test]
    fn test_blank_allergen_is_noop() {
        let recipes = fixture();
        let all: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(exclude_allergens(all.clone(), &[""]), all);
        assert_eq!(exclude_allergens(all.clone(), &["  ", ""]), all);
        assert_eq!(exclude_allergens::<&str>(all.clone(), &[]), all);
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let recipes = fixture();
        let first = exclude_allergens(
            filter_by_preference(recipes.iter().collect(), DietPreference::Vegetarian),
            &["peanut"],
        );
        let second = filter_by_preference(
            exclude_allergens(recipes.iter().collect(), &["peanut"]),
            DietPreference::Vegetarian,
        );
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["lentil soup"]);
    }
}
