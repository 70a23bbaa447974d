use std::collections::HashMap;

use crate::models::{FeedingScheduleEntry, Food, FoodAmount, Meal};
use crate::planner::constants::{MIN_DISPLAY_GRAMS, UNKNOWN_FOOD_NAME};

/// Allocate a daily energy budget across meals into gram amounts.
///
/// Pure recomputation: identical inputs give identical output and
/// nothing is mutated. Splits are trusted to sum to 1.0 (enforced when
/// the `Meal` was built). A split entry whose food id no longer
/// resolves becomes a zero-gram placeholder instead of failing the
/// rest of the schedule; placeholders then fall out with the other
/// sub-threshold amounts.
pub fn allocate(foods: &[Food], meals: &[Meal], daily_mer: f64) -> Vec<FeedingScheduleEntry> {
    let by_id: HashMap<&str, &Food> = foods.iter().map(|f| (f.id.as_str(), f)).collect();

    meals
        .iter()
        .map(|meal| {
            let meal_kcal = daily_mer * meal.calorie_percent / 100.0;

            let amounts: Vec<FoodAmount> = meal
                .split
                .iter()
                .map(|entry| match by_id.get(entry.food_id.as_str()) {
                    Some(food) => {
                        let kcal_from_food = meal_kcal * entry.ratio;
                        let grams = kcal_from_food / food.kcal_per_100g * 100.0;
                        FoodAmount {
                            food_name: food.name.clone(),
                            grams,
                        }
                    }
                    None => FoodAmount {
                        food_name: UNKNOWN_FOOD_NAME.to_string(),
                        grams: 0.0,
                    },
                })
                .filter(|amount| amount.grams > MIN_DISPLAY_GRAMS)
                .collect();

            FeedingScheduleEntry {
                meal_id: meal.id.clone(),
                meal_name: meal.name.clone(),
                meal_kcal,
                amounts,
            }
        })
        .collect()
}
