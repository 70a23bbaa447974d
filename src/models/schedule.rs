use serde::{Deserialize, Serialize};

/// Grams of one food within a scheduled meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAmount {
    pub food_name: String,
    pub grams: f64,
}

/// One meal of the computed feeding schedule.
///
/// Derived output, never stored: recomputed from the plan whenever it
/// is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingScheduleEntry {
    pub meal_id: String,
    pub meal_name: String,

    /// Calories this meal contributes, kcal.
    pub meal_kcal: f64,

    pub amounts: Vec<FoodAmount>,
}
