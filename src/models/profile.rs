use serde::{Deserialize, Serialize};

/// Life-stage classification driving the maintenance energy factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Neutered,
    Intact,
    Inactive,
    WeightLoss,
    WeightGain,
    /// Kitten, 0 to 4 months.
    KittenYoung,
    /// Kitten, 4 months to 1 year.
    KittenOld,
}

impl LifeStage {
    /// Parse a stage label, falling back to `Neutered` for anything
    /// unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "neutered" => LifeStage::Neutered,
            "intact" => LifeStage::Intact,
            "inactive" => LifeStage::Inactive,
            "weight_loss" => LifeStage::WeightLoss,
            "weight_gain" => LifeStage::WeightGain,
            "kitten_young" => LifeStage::KittenYoung,
            "kitten_old" => LifeStage::KittenOld,
            _ => LifeStage::Neutered,
        }
    }

    /// Machine label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            LifeStage::Neutered => "neutered",
            LifeStage::Intact => "intact",
            LifeStage::Inactive => "inactive",
            LifeStage::WeightLoss => "weight_loss",
            LifeStage::WeightGain => "weight_gain",
            LifeStage::KittenYoung => "kitten_young",
            LifeStage::KittenOld => "kitten_old",
        }
    }

    /// Human-readable name for prompts and rendering.
    pub fn description(&self) -> &'static str {
        match self {
            LifeStage::Neutered => "Neutered Adult",
            LifeStage::Intact => "Intact Adult",
            LifeStage::Inactive => "Inactive / Obese Prone",
            LifeStage::WeightLoss => "Weight Loss Plan",
            LifeStage::WeightGain => "Weight Gain Plan",
            LifeStage::KittenYoung => "Kitten (0-4 months)",
            LifeStage::KittenOld => "Kitten (4-12 months)",
        }
    }

    /// All stages, in the order they are offered for selection.
    pub fn all() -> [LifeStage; 7] {
        [
            LifeStage::Neutered,
            LifeStage::Intact,
            LifeStage::Inactive,
            LifeStage::WeightLoss,
            LifeStage::WeightGain,
            LifeStage::KittenOld,
            LifeStage::KittenYoung,
        ]
    }
}

impl Default for LifeStage {
    fn default() -> Self {
        LifeStage::Neutered
    }
}

/// The session's cat: body weight plus life stage.
///
/// A single profile per session, mutated in place by the caller. Weight
/// may transiently be zero or nonsense while the user is mid-edit; the
/// energy calculation treats that as "no requirement yet" rather than
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatProfile {
    pub weight_kg: f64,
    pub life_stage: LifeStage,
}

impl CatProfile {
    pub fn new(weight_kg: f64, life_stage: LifeStage) -> Self {
        Self {
            weight_kg,
            life_stage,
        }
    }
}

impl Default for CatProfile {
    fn default() -> Self {
        Self {
            weight_kg: 0.0,
            life_stage: LifeStage::Neutered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_stages() {
        assert_eq!(LifeStage::from_label("intact"), LifeStage::Intact);
        assert_eq!(LifeStage::from_label("weight_loss"), LifeStage::WeightLoss);
        assert_eq!(LifeStage::from_label("kitten_young"), LifeStage::KittenYoung);
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(LifeStage::from_label("Neutered"), LifeStage::Neutered);
        assert_eq!(LifeStage::from_label("  INACTIVE "), LifeStage::Inactive);
    }

    #[test]
    fn test_from_label_unknown_falls_back_to_neutered() {
        assert_eq!(LifeStage::from_label("senior"), LifeStage::Neutered);
        assert_eq!(LifeStage::from_label(""), LifeStage::Neutered);
    }

    #[test]
    fn test_label_roundtrip() {
        for stage in LifeStage::all() {
            assert_eq!(LifeStage::from_label(stage.label()), stage);
        }
    }
}
