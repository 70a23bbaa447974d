use clap::Parser;

use cat_food_planner_rs::cli::{Cli, Command};
use cat_food_planner_rs::error::Result;
use cat_food_planner_rs::interface::{
    display_energy, display_foods, display_meals, display_schedule, prompt_export_path,
    prompt_library_pick, prompt_life_stage, prompt_main_menu, prompt_manual_food, prompt_meal,
    prompt_pick, prompt_weight, prompt_yes_no, MenuAction,
};
use cat_food_planner_rs::models::{CatProfile, Food, LifeStage, Meal};
use cat_food_planner_rs::planner::compute_energy_requirement;
use cat_food_planner_rs::state::{write_schedule, PlanManager, ScheduleExport, FOOD_LIBRARY};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(),
        Command::Library => cmd_library(),
        Command::Energy { weight, stage } => cmd_energy(weight, &stage),
    }
}

/// Interactive planning session.
fn cmd_plan() -> Result<()> {
    println!("Cat Food Planner");
    println!();

    let weight = prompt_weight(0.0)?;
    let stage = prompt_life_stage(LifeStage::Neutered)?;
    let mut plan = PlanManager::new(CatProfile::new(weight, stage));

    loop {
        println!();
        display_energy(&plan.energy_requirement());
        println!(
            "{} foods, {} meals in the plan",
            plan.food_count(),
            plan.meal_count()
        );
        println!();

        match prompt_main_menu()? {
            MenuAction::AddLibraryFood => add_library_food(&mut plan)?,
            MenuAction::AddManualFood => add_manual_food(&mut plan)?,
            MenuAction::RemoveFood => remove_food(&mut plan)?,
            MenuAction::EditProfile => edit_profile(&mut plan)?,
            MenuAction::AddMeal => add_meal(&mut plan)?,
            MenuAction::RemoveMeal => remove_meal(&mut plan)?,
            MenuAction::ShowSchedule => show_schedule(&plan),
            MenuAction::ExportSchedule => export_schedule(&plan)?,
            MenuAction::Quit => {
                let confirm = prompt_yes_no("Quit? The plan is not saved.", true)?;
                if confirm {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Print the preset library.
fn cmd_library() -> Result<()> {
    display_foods(&FOOD_LIBRARY, "Food Library");
    Ok(())
}

/// One-shot energy requirement calculation.
fn cmd_energy(weight: f64, stage: &str) -> Result<()> {
    let stage = LifeStage::from_label(stage);
    let requirement = compute_energy_requirement(weight, stage);

    println!(
        "{} kg, {}:",
        weight,
        stage.description()
    );
    display_energy(&requirement);
    Ok(())
}

fn add_library_food(plan: &mut PlanManager) -> Result<()> {
    let existing: Vec<String> = plan.foods().iter().map(|f| f.name.clone()).collect();

    let Some(preset) = prompt_library_pick(&existing)? else {
        return Ok(());
    };

    plan.add_food(preset.clone())?;
    println!(
        "Added \"{}\" ({:.0} kcal/100g) from library",
        preset.name, preset.kcal_per_100g
    );
    Ok(())
}

fn add_manual_food(plan: &mut PlanManager) -> Result<()> {
    let entry = prompt_manual_food()?;

    let id = plan.food_id_for_name(&entry.name);
    let food = match Food::new(
        id,
        entry.name.clone(),
        entry.protein_pct,
        entry.fat_pct,
        entry.fibre_pct,
        entry.ash_pct,
        entry.moisture_pct,
    ) {
        Ok(food) => food,
        Err(e) => {
            // Rejected label: report and drop, nothing is stored.
            println!("{}", e);
            return Ok(());
        }
    };

    let (name, kcal) = (food.name.clone(), food.kcal_per_100g);
    plan.add_food(food)?;
    println!("Added \"{}\" ({:.0} kcal/100g)", name, kcal);
    Ok(())
}

fn remove_food(plan: &mut PlanManager) -> Result<()> {
    if plan.foods().is_empty() {
        println!("No foods to remove.");
        return Ok(());
    }

    let labels: Vec<String> = plan.foods().iter().map(|f| f.name.clone()).collect();
    let Some(index) = prompt_pick("Remove which food?", &labels)? else {
        return Ok(());
    };

    let id = plan.foods()[index].id.clone();
    let meals_before = plan.meal_count();
    let removed = plan.remove_food(&id)?;

    println!("Removed \"{}\".", removed.name);
    let dropped = meals_before - plan.meal_count();
    if dropped > 0 {
        println!("Deleted {} meal(s) left without any food.", dropped);
    }
    Ok(())
}

fn edit_profile(plan: &mut PlanManager) -> Result<()> {
    let weight = prompt_weight(plan.profile().weight_kg)?;
    let stage = prompt_life_stage(plan.profile().life_stage)?;
    plan.set_weight(weight);
    plan.set_life_stage(stage);
    Ok(())
}

fn add_meal(plan: &mut PlanManager) -> Result<()> {
    if plan.foods().is_empty() {
        println!("Add at least one food before creating a meal.");
        return Ok(());
    }

    let Some((name, calorie_percent, draft)) = prompt_meal(plan.foods())? else {
        return Ok(());
    };

    let id = plan.next_meal_id();
    match Meal::new(id, name, calorie_percent, draft.to_split()) {
        Ok(meal) => {
            println!("Added \"{}\" meal ({:.0}%).", meal.name, meal.calorie_percent);
            plan.add_meal(meal);

            let total = plan.total_calorie_percent();
            if total > 100.1 {
                println!("Warning: meals now allocate {:.0}% of daily calories.", total);
            }
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn remove_meal(plan: &mut PlanManager) -> Result<()> {
    if plan.meals().is_empty() {
        println!("No meals to remove.");
        return Ok(());
    }

    let labels: Vec<String> = plan
        .meals()
        .iter()
        .map(|m| format!("{} ({:.0}%)", m.name, m.calorie_percent))
        .collect();
    let Some(index) = prompt_pick("Remove which meal?", &labels)? else {
        return Ok(());
    };

    let id = plan.meals()[index].id.clone();
    let removed = plan.remove_meal(&id)?;
    println!("Removed \"{}\".", removed.name);
    Ok(())
}

fn show_schedule(plan: &PlanManager) {
    display_foods(plan.foods(), "Foods");
    display_meals(plan.meals(), plan.foods());
    display_schedule(
        &plan.schedule(),
        &plan.energy_requirement(),
        plan.total_calorie_percent(),
    );
}

fn export_schedule(plan: &PlanManager) -> Result<()> {
    if plan.meals().is_empty() {
        println!("Nothing to export yet.");
        return Ok(());
    }

    let path = prompt_export_path()?;
    let schedule = plan.schedule();
    let export = ScheduleExport::new(plan.energy_requirement(), plan.foods(), &schedule);
    write_schedule(&path, &export)?;
    println!("Schedule written to {}.", path);
    Ok(())
}
