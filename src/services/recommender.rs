use crate::models::{NutritionTarget, QueryLayout, Recipe};

/// A recipe paired with its request-local similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub similarity: f64,
}

/// Cosine similarity, 0.0 when either vector has zero norm
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Nine-dimensional query vector compared against recipe nutrient vectors
pub fn query_vector(target: &NutritionTarget, layout: QueryLayout) -> [f64; 9] {
    match layout {
        QueryLayout::Legacy => [
            target.calories,
            target.fat_g,
            target.carbs_g,
            target.protein_g,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        QueryLayout::Aligned => [
            target.calories,
            target.fat_g,
            0.0,
            0.0,
            0.0,
            target.carbs_g,
            0.0,
            0.0,
            target.protein_g,
        ],
    }
}

/// Ranks candidates by similarity to the target and keeps the best `top_n`.
///
/// Ties keep candidate order. Fewer than `top_n` candidates returns them all.
pub fn recommend<'a>(
    target: &NutritionTarget,
    candidates: &[&'a Recipe],
    top_n: usize,
    layout: QueryLayout,
) -> Vec<ScoredRecipe<'a>> {
    let query = query_vector(target, layout);

    let mut scored: Vec<ScoredRecipe<'a>> = candidates
        .iter()
        .map(|&recipe| ScoredRecipe {
            recipe,
            similarity: cosine_similarity(&query, &recipe.nutrients.as_vector()),
        })
        .collect();

    // Stable, so equal scores stay in candidate order
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;
    use approx::assert_relative_eq;

    fn recipe(name: &str, values: [f64; 9]) -> Recipe {
        Recipe::new(
            name.to_string(),
            NutrientProfile::from_vector(values),
            String::new(),
        )
    }

    fn target() -> NutritionTarget {
        NutritionTarget {
            bmr: 1346.65,
            tdee: 1615.98,
            calories: 1115.98,
            protein_g: 83.6985,
            fat_g: 37.1993,
            carbs_g: 111.598,
        }
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = [3.0, 4.0, 0.5, 12.0];
        assert_relative_eq!(cosine_similarity(&v, &v), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_mismatched() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_legacy_query_vector_layout() {
        let t = target();
        let q = query_vector(&t, QueryLayout::Legacy);
        assert_eq!(q[..4], [t.calories, t.fat_g, t.carbs_g, t.protein_g]);
        assert!(q[4..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_aligned_query_vector_layout() {
        let t = target();
        let q = query_vector(&t, QueryLayout::Aligned);
        let as_profile = NutrientProfile::from_vector(q);
        assert_eq!(as_profile.calories, t.calories);
        assert_eq!(as_profile.fat, t.fat_g);
        assert_eq!(as_profile.carbohydrate, t.carbs_g);
        assert_eq!(as_profile.protein, t.protein_g);
        assert_eq!(as_profile.sodium, 0.0);
    }

    #[test]
    fn test_recommend_ranks_by_similarity() {
        let t = target();
        let query = query_vector(&t, QueryLayout::Legacy);
        let exact = recipe("exact", query);
        let sodium_bomb = recipe("sodium bomb", [100.0, 1.0, 0.0, 0.0, 5000.0, 1.0, 0.0, 0.0, 1.0]);
        let halfway = recipe("halfway", [500.0, 20.0, 60.0, 40.0, 400.0, 0.0, 0.0, 0.0, 0.0]);
        let candidates = vec![&sodium_bomb, &halfway, &exact];

        let ranked = recommend(&t, &candidates, 5, QueryLayout::Legacy);
        let names: Vec<&str> = ranked.iter().map(|s| s.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["exact", "halfway", "sodium bomb"]);
        assert_relative_eq!(ranked[0].similarity, 1.0, epsilon = 1e-12);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].similarity >= pair[1].similarity));
    }

    #[test]
    fn test_recommend_truncates_to_top_n() {
        let t = target();
        let recipes: Vec<Recipe> = (1..=8)
            .map(|i| recipe(&format!("r{}", i), [i as f64 * 100.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .collect();
        let candidates: Vec<&Recipe> = recipes.iter().collect();

        assert_eq!(recommend(&t, &candidates, 5, QueryLayout::Legacy).len(), 5);
        assert_eq!(recommend(&t, &candidates[..3], 5, QueryLayout::Legacy).len(), 3);
        assert!(recommend(&t, &[], 5, QueryLayout::Legacy).is_empty());
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let t = target();
        let first = recipe("first", [10.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let second = recipe("second", [10.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let zero = recipe("zero", [0.0; 9]);
        let candidates = vec![&zero, &first, &second];

        let ranked = recommend(&t, &candidates, 3, QueryLayout::Legacy);
        let names: Vec<&str> = ranked.iter().map(|s| s.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "zero"]);
        assert_eq!(ranked[2].similarity, 0.0);
    }

    #[test]
    fn test_recommend_does_not_touch_candidates() {
        let t = target();
        let a = recipe("a", [1.0; 9]);
        let snapshot = a.clone();
        let candidates = vec![&a];
        let _ = recommend(&t, &candidates, 1, QueryLayout::Aligned);
        assert_eq!(a, snapshot);
    }
}
