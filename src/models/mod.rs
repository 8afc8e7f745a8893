use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[macro_use]
mod macros;

pub mod recipe;
pub mod user_profile;

pub use recipe::{NutrientProfile, Recipe, NUTRIENT_COLUMNS};
pub use user_profile::UserProfile;

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

labelled_enum!(Sex, default = Female, error = AppError::InvalidInput, {
    Male => "male",
    Female => "female",
});

/// Self-reported physical activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    Moderate,
    VeryActive,
    ExtraActive,
}

labelled_enum!(ActivityLevel, default = Sedentary, error = AppError::InvalidInput, {
    Sedentary => "sedentary",
    LightlyActive => "lightly_active",
    Moderate => "moderate",
    VeryActive => "very_active",
    ExtraActive => "extra_active",
});

/// What the user wants to do with their weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintenance,
}

labelled_enum!(Goal, default = Maintenance, error = AppError::InvalidGoal, {
    WeightLoss => "weight_loss",
    WeightGain => "weight_gain",
    Maintenance => "maintenance",
});

/// Dietary preference matched against recipe instructions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    #[serde(rename = "none")]
    Unrestricted,
}

labelled_enum!(DietPreference, default = Unrestricted, error = AppError::InvalidInput, {
    Vegetarian => "vegetarian",
    Vegan => "vegan",
    Unrestricted => "none",
});

impl DietPreference {
    /// Word a recipe's instructions must mention, if any
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            DietPreference::Vegetarian | DietPreference::Vegan => Some(self.as_str()),
            DietPreference::Unrestricted => None,
        }
    }
}

/// Layout of the target profile against the nine recipe nutrient columns
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryLayout {
    /// `[calories, fat, carbs, protein, 0, 0, 0, 0, 0]`, compared positionally
    /// with the recipe columns regardless of their meaning
    #[default]
    Legacy,
    /// Each target value sits on the recipe column of the same nutrient
    Aligned,
}

/// Daily energy and macronutrient targets derived from a user profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTarget {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,
    /// Goal-adjusted calorie target, kcal/day
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse_known_labels() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(
            "lightly_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!("weight_gain".parse::<Goal>().unwrap(), Goal::WeightGain);
        assert_eq!(
            "none".parse::<DietPreference>().unwrap(),
            DietPreference::Unrestricted
        );
    }

    #[test]
    fn test_unknown_goal_is_invalid_goal() {
        let err = "bulk".parse::<Goal>().unwrap_err();
        assert!(matches!(err, AppError::InvalidGoal(_)));
    }

    #[test]
    fn test_unknown_activity_is_invalid_input() {
        let err = "couch".parse::<ActivityLevel>().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_from_label_fallbacks() {
        assert_eq!(Sex::from_label("other"), Sex::Female);
        assert_eq!(ActivityLevel::from_label("unknown"), ActivityLevel::Sedentary);
        assert_eq!(Goal::from_label("bulk"), Goal::Maintenance);
        assert_eq!(
            DietPreference::from_label("pescatarian"),
            DietPreference::Unrestricted
        );
    }

    #[test]
    fn test_labels_match_serde() {
        for level in ActivityLevel::ALL {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        for preference in DietPreference::ALL {
            let json = serde_json::to_string(preference).unwrap();
            assert_eq!(json, format!("\"{}\"", preference.as_str()));
        }
    }

    #[test]
    fn test_preference_keyword() {
        assert_eq!(DietPreference::Vegan.keyword(), Some("vegan"));
        assert_eq!(DietPreference::Unrestricted.keyword(), None);
    }
}
