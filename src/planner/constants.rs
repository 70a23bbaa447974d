use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::LifeStage;

/// Metabolizable energy per gram of protein (kcal).
pub const KCAL_PER_G_PROTEIN: f64 = 3.5;

/// Metabolizable energy per gram of fat (kcal).
pub const KCAL_PER_G_FAT: f64 = 8.5;

/// Metabolizable energy per gram of carbohydrate (kcal).
///
/// Simplified coefficient set, not the full modified-Atwater table.
pub const KCAL_PER_G_CARBS: f64 = 3.5;

/// Moisture assumed when the label omits it (typical dry food).
pub const DEFAULT_MOISTURE_PCT: f64 = 8.0;

/// Upper bound for the macronutrient + moisture sum, with slack for
/// labels rounded to one decimal.
pub const NUTRIENT_SUM_LIMIT: f64 = 100.1;

/// RER coefficient: kcal/day per kg^0.75 of body weight.
pub const RER_COEFFICIENT: f64 = 70.0;

/// RER exponent over body weight.
pub const RER_EXPONENT: f64 = 0.75;

/// Factor applied when the life stage is missing from the table
/// (neutered adult).
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Ratios of a meal split must sum to 1.0 within this tolerance.
pub const SPLIT_SUM_TOLERANCE: f64 = 0.001;

/// Scheduled amounts at or below this many grams are rounding noise
/// and are dropped from the schedule.
pub const MIN_DISPLAY_GRAMS: f64 = 0.01;

/// Placeholder name for split entries whose food no longer exists.
pub const UNKNOWN_FOOD_NAME: &str = "Unknown Food";

/// Map from life stage to maintenance energy factor.
pub static ACTIVITY_FACTORS: LazyLock<HashMap<LifeStage, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(LifeStage::Neutered, 1.2);
    m.insert(LifeStage::Intact, 1.4);
    m.insert(LifeStage::Inactive, 1.0);
    m.insert(LifeStage::WeightLoss, 0.8);
    m.insert(LifeStage::WeightGain, 1.8);
    m.insert(LifeStage::KittenYoung, 2.5);
    m.insert(LifeStage::KittenOld, 2.0);
    m
});

/// Get the activity factor for a life stage.
pub fn activity_factor(stage: LifeStage) -> f64 {
    *ACTIVITY_FACTORS
        .get(&stage)
        .unwrap_or(&DEFAULT_ACTIVITY_FACTOR)
}
