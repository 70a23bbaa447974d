use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::SPLIT_SUM_TOLERANCE;

/// One food's share of a meal's calories, as a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEntry {
    pub food_id: String,
    pub ratio: f64,
}

impl SplitEntry {
    pub fn new(food_id: String, ratio: f64) -> Self {
        Self { food_id, ratio }
    }
}

/// A named meal taking a share of the daily energy requirement.
///
/// The split ratios are checked at construction; readers trust them to
/// sum to 1.0 afterwards. Calorie percentages across meals are NOT
/// required to total 100 — under- and over-allocating the day is the
/// user's call, and only warned about at the interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,

    /// Share of the daily energy requirement, in percent (> 0).
    pub calorie_percent: f64,

    pub split: Vec<SplitEntry>,
}

impl Meal {
    /// Build a meal, enforcing the split-sum invariant.
    pub fn new(
        id: String,
        name: String,
        calorie_percent: f64,
        split: Vec<SplitEntry>,
    ) -> Result<Self> {
        if !calorie_percent.is_finite() || calorie_percent <= 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "meal calorie percent must be positive, got {calorie_percent}"
            )));
        }

        let total: f64 = split.iter().map(|entry| entry.ratio).sum();
        if (total - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(PlannerError::SplitRatioMismatch { total });
        }

        Ok(Self {
            id,
            name,
            calorie_percent,
            split,
        })
    }

    /// Sum of the split ratios.
    #[inline]
    pub fn ratio_sum(&self) -> f64 {
        self.split.iter().map(|entry| entry.ratio).sum()
    }
}
