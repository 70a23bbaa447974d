use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Nutrients add up to {total:.1}% (more than 100%)")]
    NutrientSumExceeded { total: f64 },

    #[error("Food split ratios sum to {total:.3}, expected 1.0")]
    SplitRatioMismatch { total: f64 },

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
