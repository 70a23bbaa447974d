use crate::error::{PlannerError, Result};
use crate::models::LifeStage;
use crate::planner::constants::*;

/// Energy density derived from a food label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyDensity {
    pub kcal_per_100g: f64,

    /// Carbohydrate share inferred as the unstated remainder of the
    /// label, clamped at zero for labels that round past 100%.
    pub carb_pct: f64,
}

/// Daily energy requirement for a cat, kcal/day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyRequirement {
    /// Resting energy requirement, from body weight alone.
    pub rer: f64,

    /// Maintenance energy requirement, RER scaled by life stage.
    pub mer: f64,
}

/// Convert label percentages into metabolizable energy per 100g.
///
/// Moisture defaults to 8% when the label omits it. Carbohydrate is
/// whatever the label leaves unstated. Uses the simplified 3.5 / 8.5 /
/// 3.5 kcal-per-gram coefficients for protein / fat / carbohydrate.
pub fn compute_energy_density(
    protein_pct: f64,
    fat_pct: f64,
    fibre_pct: f64,
    ash_pct: f64,
    moisture_pct: Option<f64>,
) -> Result<EnergyDensity> {
    let moisture = moisture_pct.unwrap_or(DEFAULT_MOISTURE_PCT);
    let total = protein_pct + fat_pct + fibre_pct + ash_pct + moisture;

    if total > NUTRIENT_SUM_LIMIT {
        return Err(PlannerError::NutrientSumExceeded { total });
    }

    let carb_pct = (100.0 - total).max(0.0);
    let kcal_per_100g = protein_pct * KCAL_PER_G_PROTEIN
        + fat_pct * KCAL_PER_G_FAT
        + carb_pct * KCAL_PER_G_CARBS;

    Ok(EnergyDensity {
        kcal_per_100g,
        carb_pct,
    })
}

/// Daily resting and maintenance energy for a body weight and life
/// stage.
///
/// A weight that is not a positive finite number yields zero for both
/// values, so a half-filled profile never aborts an interactive
/// session.
pub fn compute_energy_requirement(weight_kg: f64, stage: LifeStage) -> EnergyRequirement {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return EnergyRequirement::default();
    }

    let rer = RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT);
    let mer = rer * activity_factor(stage);

    EnergyRequirement { rer, mer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_formula() {
        // protein 40, fat 15, fibre 5, ash 8, moisture 10 => carbs 22
        let density = compute_energy_density(40.0, 15.0, 5.0, 8.0, Some(10.0)).unwrap();
        let expected = 40.0 * 3.5 + 15.0 * 8.5 + 22.0 * 3.5;
        assert!((density.kcal_per_100g - expected).abs() < 1e-9);
        assert!((density.carb_pct - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_moisture_default() {
        let explicit = compute_energy_density(42.0, 15.0, 6.0, 10.0, Some(8.0)).unwrap();
        let defaulted = compute_energy_density(42.0, 15.0, 6.0, 10.0, None).unwrap();
        assert_eq!(explicit, defaulted);
    }

    #[test]
    fn test_density_boundary_sum_accepted() {
        // Sums to exactly 100.1: accepted, carbs clamp to zero.
        let density = compute_energy_density(17.1, 6.5, 0.0, 1.9, Some(74.6)).unwrap();
        assert_eq!(density.carb_pct, 0.0);
        assert!((density.kcal_per_100g - 115.1).abs() < 0.001);
    }

    #[test]
    fn test_density_overfull_label_rejected() {
        let result = compute_energy_density(17.1, 6.5, 0.1, 1.9, Some(74.6));
        match result {
            Err(PlannerError::NutrientSumExceeded { total }) => {
                assert!((total - 100.2).abs() < 0.001);
            }
            other => panic!("expected NutrientSumExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_density_is_deterministic() {
        let a = compute_energy_density(17.2, 10.2, 0.3, 2.2, Some(69.4)).unwrap();
        let b = compute_energy_density(17.2, 10.2, 0.3, 2.2, Some(69.4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_requirement_formula() {
        let req = compute_energy_requirement(4.0, LifeStage::Neutered);
        // 70 * 4^0.75 = 197.99, * 1.2 = 237.58
        assert!((req.rer - 197.99).abs() < 0.01);
        assert!((req.mer - 237.58).abs() < 0.01);
    }

    #[test]
    fn test_requirement_scales_with_stage() {
        let neutered = compute_energy_requirement(4.0, LifeStage::Neutered);
        let kitten = compute_energy_requirement(4.0, LifeStage::KittenYoung);
        assert_eq!(neutered.rer, kitten.rer);
        assert!((kitten.mer - neutered.rer * 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_requirement_safe_zero_for_bad_weight() {
        assert_eq!(
            compute_energy_requirement(0.0, LifeStage::Neutered),
            EnergyRequirement::default()
        );
        assert_eq!(
            compute_energy_requirement(-2.5, LifeStage::Intact),
            EnergyRequirement::default()
        );
        assert_eq!(
            compute_energy_requirement(f64::NAN, LifeStage::Neutered),
            EnergyRequirement::default()
        );
        assert_eq!(
            compute_energy_requirement(f64::INFINITY, LifeStage::Neutered),
            EnergyRequirement::default()
        );
    }
}
