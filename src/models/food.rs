use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::calculations::compute_energy_density;
use crate::planner::constants::DEFAULT_MOISTURE_PCT;

/// A food with its label percentages and cached energy density.
///
/// The id is a stable handle for meal splits; the display name is free
/// text and may change without breaking references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,

    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fibre_pct: f64,
    pub ash_pct: f64,

    /// Label moisture, if stated. Absent means the dry-food default.
    pub moisture_pct: Option<f64>,

    /// Computed once at construction and never re-derived.
    pub kcal_per_100g: f64,
}

impl Food {
    /// Build a food from its label, computing the energy density.
    ///
    /// Rejects labels whose macronutrients plus moisture exceed 100%
    /// (with rounding slack); no food is ever stored in that state.
    pub fn new(
        id: String,
        name: String,
        protein_pct: f64,
        fat_pct: f64,
        fibre_pct: f64,
        ash_pct: f64,
        moisture_pct: Option<f64>,
    ) -> Result<Self> {
        let density =
            compute_energy_density(protein_pct, fat_pct, fibre_pct, ash_pct, moisture_pct)?;

        Ok(Self {
            id,
            name,
            protein_pct,
            fat_pct,
            fibre_pct,
            ash_pct,
            moisture_pct,
            kcal_per_100g: density.kcal_per_100g,
        })
    }

    /// Moisture used for the energy calculation, with the default applied.
    #[inline]
    pub fn effective_moisture_pct(&self) -> f64 {
        self.moisture_pct.unwrap_or(DEFAULT_MOISTURE_PCT)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): P:{} F:{} Fi:{} A:{} M:{} => {:.1} kcal/100g",
            self.name,
            self.id,
            self.protein_pct,
            self.fat_pct,
            self.fibre_pct,
            self.ash_pct,
            self.effective_moisture_pct(),
            self.kcal_per_100g
        )
    }
}
