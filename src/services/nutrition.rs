//! Energy and macronutrient targets (Mifflin-St Jeor variant).

use crate::models::{ActivityLevel, Goal, NutritionTarget, Sex, UserProfile};

/// Daily calorie change applied for weight loss or gain
pub const GOAL_CALORIE_DELTA: f64 = 500.0;

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Fractions of daily calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroRatios {
    pub fn for_goal(goal: Goal) -> Self {
        let (protein, fat, carbs) = match goal {
            Goal::WeightLoss => (0.30, 0.30, 0.40),
            Goal::WeightGain => (0.25, 0.30, 0.45),
            Goal::Maintenance => (0.30, 0.30, 0.40),
        };
        Self {
            protein,
            fat,
            carbs,
        }
    }
}

/// Macronutrient grams for a day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Basal metabolic rate in kcal/day
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 9.99 * weight_kg + 6.25 * height_cm - 4.92 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Total daily energy expenditure in kcal/day
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Calorie target after applying the goal's surplus or deficit
pub fn adjust_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => tdee - GOAL_CALORIE_DELTA,
        Goal::WeightGain => tdee + GOAL_CALORIE_DELTA,
        Goal::Maintenance => tdee,
    }
}

pub fn macros(calories: f64, goal: Goal) -> MacroSplit {
    let ratios = MacroRatios::for_goal(goal);
    MacroSplit {
        protein_g: calories * ratios.protein / KCAL_PER_G_PROTEIN,
        fat_g: calories * ratios.fat / KCAL_PER_G_FAT,
        carbs_g: calories * ratios.carbs / KCAL_PER_G_CARBS,
    }
}

/// Runs the whole chain: BMR, TDEE, goal adjustment, macro split
pub fn nutrition_target(profile: &UserProfile) -> NutritionTarget {
    let bmr = bmr(
        profile.weight_kg,
        profile.height_cm,
        f64::from(profile.age),
        profile.sex,
    );
    let tdee = tdee(bmr, profile.activity_level);
    let calories = adjust_calories(tdee, profile.goal);
    let split = macros(calories, profile.goal);

    tracing::debug!(
        bmr,
        tdee,
        calories,
        protein_g = split.protein_g,
        fat_g = split.fat_g,
        carbs_g = split.carbs_g,
        "Computed nutrition target"
    );

    NutritionTarget {
        bmr,
        tdee,
        calories,
        protein_g: split.protein_g,
        fat_g: split.fat_g,
        carbs_g: split.carbs_g,
    }
}
