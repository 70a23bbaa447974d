use crate::error::{PlannerError, Result};
use crate::models::{CatProfile, FeedingScheduleEntry, Food, LifeStage, Meal};
use crate::planner::allocation::allocate;
use crate::planner::calculations::{compute_energy_requirement, EnergyRequirement};
use crate::planner::reconcile::remove_food_from_meals;

/// The session's plan: foods, meals, and the cat profile.
///
/// Owns the only mutable state in the crate. Every calculation over it
/// is a pure function of the current collections; structural edits go
/// through the add/remove methods so meal splits stay consistent with
/// the food list. Insertion order is kept for both collections. The
/// plan lives and dies with the process.
pub struct PlanManager {
    foods: Vec<Food>,
    meals: Vec<Meal>,
    profile: CatProfile,
    next_meal_seq: u64,
}

impl PlanManager {
    pub fn new(profile: CatProfile) -> Self {
        Self {
            foods: Vec::new(),
            meals: Vec::new(),
            profile,
            next_meal_seq: 1,
        }
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn profile(&self) -> &CatProfile {
        &self.profile
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.profile.weight_kg = weight_kg;
    }

    pub fn set_life_stage(&mut self, stage: LifeStage) {
        self.profile.life_stage = stage;
    }

    pub fn get_food(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Whether a food with this display name is already in the plan
    /// (case-insensitive).
    pub fn has_food_named(&self, name: &str) -> bool {
        self.foods
            .iter()
            .any(|food| food.name.eq_ignore_ascii_case(name))
    }

    /// Add a food. Ids must be unique within the plan; existing meal
    /// splits are left untouched (the new food has no share until a
    /// split gives it one).
    pub fn add_food(&mut self, food: Food) -> Result<()> {
        if self.get_food(&food.id).is_some() {
            return Err(PlannerError::InvalidInput(format!(
                "duplicate food id: {}",
                food.id
            )));
        }
        self.foods.push(food);
        Ok(())
    }

    /// Remove a food and repair every meal split that referenced it.
    /// Meals left without any food source are deleted.
    pub fn remove_food(&mut self, id: &str) -> Result<Food> {
        let index = self
            .foods
            .iter()
            .position(|food| food.id == id)
            .ok_or_else(|| PlannerError::FoodNotFound(id.to_string()))?;
        let removed = self.foods.remove(index);

        let meals = std::mem::take(&mut self.meals);
        self.meals = remove_food_from_meals(meals, id);

        Ok(removed)
    }

    pub fn add_meal(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    pub fn remove_meal(&mut self, id: &str) -> Result<Meal> {
        let index = self
            .meals
            .iter()
            .position(|meal| meal.id == id)
            .ok_or_else(|| PlannerError::MealNotFound(id.to_string()))?;
        Ok(self.meals.remove(index))
    }

    /// A fresh unique meal id.
    pub fn next_meal_id(&mut self) -> String {
        loop {
            let id = format!("meal_{}", self.next_meal_seq);
            self.next_meal_seq += 1;
            if !self.meals.iter().any(|meal| meal.id == id) {
                return id;
            }
        }
    }

    /// A unique food id derived from the display name.
    pub fn food_id_for_name(&self, name: &str) -> String {
        let base: String = name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        let base = if base.is_empty() {
            "food".to_string()
        } else {
            base
        };

        if self.get_food(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if self.get_food(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// Daily energy requirement for the current profile.
    pub fn energy_requirement(&self) -> EnergyRequirement {
        compute_energy_requirement(self.profile.weight_kg, self.profile.life_stage)
    }

    /// Recompute the feeding schedule from the current plan.
    pub fn schedule(&self) -> Vec<FeedingScheduleEntry> {
        allocate(&self.foods, &self.meals, self.energy_requirement().mer)
    }

    /// Sum of meal calorie percentages. May exceed 100 — the interface
    /// warns, the engine does not mind.
    pub fn total_calorie_percent(&self) -> f64 {
        self.meals.iter().map(|meal| meal.calorie_percent).sum()
    }

    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }
}

impl Default for PlanManager {
    fn default() -> Self {
        Self::new(CatProfile::default())
    }
}
