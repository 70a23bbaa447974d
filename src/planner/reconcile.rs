use crate::models::{Food, Meal, SplitEntry};
use crate::planner::constants::SPLIT_SUM_TOLERANCE;

/// Remove a food from every meal split and re-normalize the survivors.
///
/// Consumes the meal collection and returns the corrected one. Each
/// remaining ratio is divided by the post-removal sum, so the split
/// sums to 1.0 again and a lone survivor ends at exactly 1.0. Meals
/// whose split empties out, or keeps only zero-ratio entries, are
/// dropped: a meal with no food source cannot be fed.
pub fn remove_food_from_meals(meals: Vec<Meal>, food_id: &str) -> Vec<Meal> {
    meals
        .into_iter()
        .filter_map(|mut meal| {
            meal.split.retain(|entry| entry.food_id != food_id);

            let total: f64 = meal.split.iter().map(|entry| entry.ratio).sum();
            if total <= 0.0 {
                return None;
            }

            for entry in &mut meal.split {
                entry.ratio /= total;
            }
            Some(meal)
        })
        .collect()
}

/// The per-food percentage split of a meal while it is being edited.
///
/// Percentages run 0-100 here; they become [0, 1] fractions when the
/// meal is accepted. Membership follows the plan's food list via
/// `sync_foods`, which applies the addition policy: new foods start at
/// zero share, and a lone or freshly emptied draft seeds its first
/// food at 100%.
#[derive(Debug, Clone, Default)]
pub struct DraftSplit {
    ratios: Vec<(String, f64)>,
}

impl DraftSplit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the draft's entries with the plan's current foods.
    pub fn sync_foods(&mut self, foods: &[Food]) {
        let mut changed = false;

        let before = self.ratios.len();
        self.ratios
            .retain(|(id, _)| foods.iter().any(|food| &food.id == id));
        changed |= self.ratios.len() != before;

        for food in foods {
            if !self.ratios.iter().any(|(id, _)| id == &food.id) {
                self.ratios.push((food.id.clone(), 0.0));
                changed = true;
            }
        }

        if changed && !self.ratios.is_empty() && self.total() < 0.1 {
            self.ratios[0].1 = 100.0;
        }
    }

    /// Set a food's percentage, clamped to 0-100. Non-finite input
    /// counts as zero.
    pub fn set_ratio(&mut self, food_id: &str, percent: f64) {
        let percent = if percent.is_finite() { percent } else { 0.0 };
        if let Some((_, value)) = self.ratios.iter_mut().find(|(id, _)| id == food_id) {
            *value = percent.clamp(0.0, 100.0);
        }
    }

    pub fn ratio(&self, food_id: &str) -> f64 {
        self.ratios
            .iter()
            .find(|(id, _)| id == food_id)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    /// Sum of the draft percentages.
    pub fn total(&self) -> f64 {
        self.ratios.iter().map(|(_, value)| value).sum()
    }

    /// Whether the draft totals 100% within the split tolerance.
    pub fn is_total_valid(&self) -> bool {
        (self.total() - 100.0).abs() < SPLIT_SUM_TOLERANCE * 100.0
    }

    /// Convert to split entries with [0, 1] ratios. Zero-share entries
    /// are kept; they allocate to zero grams and drop out of the
    /// rendered schedule.
    pub fn to_split(&self) -> Vec<SplitEntry> {
        self.ratios
            .iter()
            .map(|(id, percent)| SplitEntry::new(id.clone(), percent / 100.0))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}
