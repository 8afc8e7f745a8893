use std::ops::RangeInclusive;

use super::{ActivityLevel, DietPreference, Goal, Sex};
use crate::error::{AppError, AppResult};

/// Accepted age in years
pub const AGE_RANGE: RangeInclusive<u32> = 1..=100;
/// Accepted body weight in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=200.0;
/// Accepted height in centimetres
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=250.0;

/// Biometric inputs and dietary constraints for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietPreference,
    /// Lowercased, trimmed, non-empty allergen tokens
    pub allergens: Vec<String>,
}

impl UserProfile {
    /// Creates a profile, rejecting biometrics outside the accepted ranges
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> AppResult<Self> {
        check_range("age", age, &AGE_RANGE)?;
        check_range("weight_kg", weight_kg, &WEIGHT_KG_RANGE)?;
        check_range("height_cm", height_cm, &HEIGHT_CM_RANGE)?;

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            sex,
            activity_level,
            goal,
            diet_preference: DietPreference::Unrestricted,
            allergens: Vec::new(),
        })
    }

    pub fn with_diet_preference(mut self, diet_preference: DietPreference) -> Self {
        self.diet_preference = diet_preference;
        self
    }

    /// Adds every allergen from comma-separated text
    pub fn with_allergies(mut self, allergies: &str) -> Self {
        for allergen in allergies.split(',') {
            self.add_allergen(allergen);
        }
        self
    }

    /// Adds an allergen; blank and duplicate tokens are ignored
    pub fn add_allergen(&mut self, allergen: &str) {
        let allergen = allergen.trim().to_lowercase();
        if !allergen.is_empty() && !self.allergens.contains(&allergen) {
            self.allergens.push(allergen);
        }
    }
}

fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> AppResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )))
    }
}
