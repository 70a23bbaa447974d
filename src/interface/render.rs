use crate::models::{FeedingScheduleEntry, Food, Meal};
use crate::planner::calculations::EnergyRequirement;

/// Display the daily energy requirement.
pub fn display_energy(requirement: &EnergyRequirement) {
    println!(
        "Daily RER: {:.0} kcal | Daily MER: {:.0} kcal",
        requirement.rer, requirement.mer
    );
}

/// Display a list of foods with their energy densities.
pub fn display_foods(foods: &[Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for food in foods {
        println!(
            "  {:<width$}  {:>4.0} kcal/100g  (P:{} F:{} Fi:{} A:{} M:{})",
            food.name,
            food.kcal_per_100g,
            food.protein_pct,
            food.fat_pct,
            food.fibre_pct,
            food.ash_pct,
            food.effective_moisture_pct(),
            width = max_name_len
        );
    }
    println!();
}

/// Display the plan's meals with their splits.
pub fn display_meals(meals: &[Meal], foods: &[Food]) {
    if meals.is_empty() {
        println!("Meals: (none)");
        return;
    }

    println!();
    println!("=== Meals ({}) ===", meals.len());
    println!();

    for meal in meals {
        println!("  {} ({:.0}% of daily calories)", meal.name, meal.calorie_percent);
        for entry in &meal.split {
            let name = foods
                .iter()
                .find(|food| food.id == entry.food_id)
                .map(|food| food.name.as_str())
                .unwrap_or("Unknown Food");
            println!("    {:>5.1}%  {}", entry.ratio * 100.0, name);
        }
    }
    println!();
}

/// Display the computed feeding schedule.
pub fn display_schedule(
    schedule: &[FeedingScheduleEntry],
    requirement: &EnergyRequirement,
    total_calorie_percent: f64,
) {
    if schedule.is_empty() {
        println!("Add a profile and at least one meal to see the schedule.");
        return;
    }

    println!();
    println!("=== Feeding Schedule ===");
    println!();

    for entry in schedule {
        println!("{} ({:.0} kcal)", entry.meal_name, entry.meal_kcal);
        for amount in &entry.amounts {
            println!("    {:>7.1} g  {}", amount.grams, amount.food_name);
        }
        if entry.amounts.is_empty() {
            println!("    (nothing to serve)");
        }
        println!();
    }

    println!("Total daily amount: {:.0} kcal/day", requirement.mer);
    if total_calorie_percent > 100.1 {
        println!(
            "Warning: meals allocate {:.0}% of the daily requirement.",
            total_calorie_percent
        );
    }
    println!();
}
