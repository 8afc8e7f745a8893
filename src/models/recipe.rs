/// CSV column names of the nine nutrient fields, in vector order
pub const NUTRIENT_COLUMNS: [&str; 9] = [
    "Calories",
    "FatContent",
    "SaturatedFatContent",
    "CholesterolContent",
    "SodiumContent",
    "CarbohydrateContent",
    "FiberContent",
    "SugarContent",
    "ProteinContent",
];

/// Nutrient content of one recipe.
///
/// Field order matches [`NUTRIENT_COLUMNS`] and [`NutrientProfile::as_vector`];
/// similarity scores depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientProfile {
    pub calories: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub protein: f64,
}

impl NutrientProfile {
    /// Builds a profile from values in [`NUTRIENT_COLUMNS`] order
    pub fn from_vector(values: [f64; 9]) -> Self {
        let [calories, fat, saturated_fat, cholesterol, sodium, carbohydrate, fiber, sugar, protein] =
            values;
        Self {
            calories,
            fat,
            saturated_fat,
            cholesterol,
            sodium,
            carbohydrate,
            fiber,
            sugar,
            protein,
        }
    }

    pub fn as_vector(&self) -> [f64; 9] {
        [
            self.calories,
            self.fat,
            self.saturated_fat,
            self.cholesterol,
            self.sodium,
            self.carbohydrate,
            self.fiber,
            self.sugar,
            self.protein,
        ]
    }
}

/// One row of the recipe dataset, already normalized
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub nutrients: NutrientProfile,
    pub instructions: String,
}

impl Recipe {
    pub fn new(name: String, nutrients: NutrientProfile, instructions: String) -> Self {
        Self {
            name,
            nutrients,
            instructions,
        }
    }

    /// Case-insensitive substring match against the instructions.
    ///
    /// `needle` must already be lowercased. An empty needle never matches.
    pub fn instructions_mention(&self, needle: &str) -> bool {
        self.instructions_mention_any(&[needle])
    }

    /// Whether the instructions contain any of the lowercased needles.
    ///
    /// The instructions are lowercased once per call, however many needles
    /// are checked. Empty needles never match.
    pub fn instructions_mention_any<S: AsRef<str>>(&self, needles: &[S]) -> bool {
        let mut needles = needles
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|needle| !needle.is_empty())
            .peekable();
        if needles.peek().is_none() {
            return false;
        }

        let haystack = self.instructions.to_lowercase();
        needles.any(|needle| haystack.contains(needle))
    }
}
