use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{ActivityLevel, DietPreference, Goal, NutritionTarget, Sex, UserProfile};
use crate::services::{nutrition, recommendations, ScoredRecipe};

use super::AppState;

// Request/Response types

/// Biometric form submitted by the client.
///
/// Enum-like fields arrive as text and are validated once, in
/// [`ProfileRequest::to_profile`].
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: String,
    pub activity_level: String,
    pub goal: String,
    #[serde(default)]
    pub diet_preference: Option<String>,
    /// Comma-separated allergens
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl ProfileRequest {
    pub fn to_profile(&self) -> AppResult<UserProfile> {
        let diet_preference = match &self.diet_preference {
            Some(label) => label.parse::<DietPreference>()?,
            None => DietPreference::Unrestricted,
        };

        Ok(UserProfile::new(
            self.age,
            self.weight_kg,
            self.height_cm,
            self.sex.parse::<Sex>()?,
            self.activity_level.parse::<ActivityLevel>()?,
            self.goal.parse::<Goal>()?,
        )?
        .with_diet_preference(diet_preference)
        .with_allergies(&self.allergies))
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub recipe_count: usize,
    pub skipped_rows: usize,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub sodium: f64,
    pub instructions: String,
    pub similarity: f64,
}

impl From<&ScoredRecipe<'_>> for RecipeResponse {
    fn from(scored: &ScoredRecipe<'_>) -> Self {
        let recipe = scored.recipe;
        Self {
            name: recipe.name.clone(),
            calories: recipe.nutrients.calories,
            protein: recipe.nutrients.protein,
            fat: recipe.nutrients.fat,
            carbohydrate: recipe.nutrients.carbohydrate,
            sodium: recipe.nutrients.sodium,
            instructions: recipe.instructions.clone(),
            similarity: scored.similarity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub target: NutritionTarget,
    pub recipes: Vec<RecipeResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Size of the loaded recipe catalog
pub async fn catalog_summary(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        recipe_count: state.catalog.len(),
        skipped_rows: state.catalog.skipped_rows(),
    })
}

/// Daily calorie and macronutrient targets for a profile
pub async fn nutrition_targets(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> AppResult<Json<NutritionTarget>> {
    let Json(request) = payload?;
    let profile = request.to_profile()?;
    let target = nutrition::nutrition_target(&profile);

    tracing::info!(
        request_id = %request_id,
        goal = %profile.goal,
        calories = target.calories,
        "Computed nutrition targets"
    );

    Ok(Json(target))
}

/// Ranked recipe recommendations for a profile
pub async fn recommend_meals(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;
    let top_n = resolve_top_n(request.top_n, &state)?;
    let profile = request.to_profile()?;

    tracing::info!(
        request_id = %request_id,
        top_n,
        diet_preference = %profile.diet_preference,
        allergens = profile.allergens.len(),
        "Processing recommendation request"
    );

    let result = recommendations::recommend_for_profile(
        &state.catalog,
        &profile,
        top_n,
        state.settings.query_layout,
    );

    tracing::info!(
        request_id = %request_id,
        returned = result.recipes.len(),
        "Recommendations completed"
    );

    Ok(Json(RecommendationResponse {
        target: result.target,
        recipes: result.recipes.iter().map(RecipeResponse::from).collect(),
    }))
}

fn resolve_top_n(requested: Option<usize>, state: &AppState) -> AppResult<usize> {
    let max = state.settings.max_top_n;
    match requested {
        None => Ok(state.settings.default_top_n),
        Some(n) if (1..=max).contains(&n) => Ok(n),
        Some(n) => Err(AppError::InvalidInput(format!(
            "top_n must be between 1 and {}, got {}",
            max, n
        ))),
    }
}
