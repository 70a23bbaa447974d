use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::interface::parse::parse_label_text;
use crate::models::{Food, LifeStage};
use crate::planner::reconcile::DraftSplit;
use crate::state::search_library;

/// Top-level actions of the interactive planning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddLibraryFood,
    AddManualFood,
    RemoveFood,
    EditProfile,
    AddMeal,
    RemoveMeal,
    ShowSchedule,
    ExportSchedule,
    Quit,
}

/// Raw manual-entry values for a food, before id assignment.
#[derive(Debug, Clone)]
pub struct ManualFoodEntry {
    pub name: String,
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fibre_pct: f64,
    pub ash_pct: f64,
    pub moisture_pct: Option<f64>,
}

/// Main menu of the planning session.
pub fn prompt_main_menu() -> Result<MenuAction> {
    let actions = [
        (MenuAction::AddLibraryFood, "Add food from library"),
        (MenuAction::AddManualFood, "Add food manually"),
        (MenuAction::RemoveFood, "Remove a food"),
        (MenuAction::EditProfile, "Edit cat profile"),
        (MenuAction::AddMeal, "Add a meal"),
        (MenuAction::RemoveMeal, "Remove a meal"),
        (MenuAction::ShowSchedule, "Show feeding schedule"),
        (MenuAction::ExportSchedule, "Export schedule to JSON"),
        (MenuAction::Quit, "Quit"),
    ];

    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].0)
}

/// Prompt for the cat's body weight in kilograms.
pub fn prompt_weight(current: f64) -> Result<f64> {
    let default = if current > 0.0 {
        current.to_string()
    } else {
        "4.5".to_string()
    };

    let input: String = Input::new()
        .with_prompt("Cat's weight (kg)")
        .default(default)
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid weight".to_string()))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for the cat's life stage.
pub fn prompt_life_stage(current: LifeStage) -> Result<LifeStage> {
    let stages = LifeStage::all();
    let labels: Vec<&str> = stages.iter().map(|stage| stage.description()).collect();
    let default = stages.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Cat's life stage")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(stages[selection])
}

/// Search the preset library and pick a food to add.
///
/// Returns `None` when nothing matched or the user backed out.
pub fn prompt_library_pick(exclude_names: &[String]) -> Result<Option<&'static Food>> {
    let term: String = Input::new()
        .with_prompt("Search library (empty lists everything)")
        .allow_empty(true)
        .interact_text()?;

    let matches = search_library(&term, exclude_names);
    if matches.is_empty() {
        println!("No library foods match '{}'.", term.trim());
        return Ok(None);
    }

    let mut labels: Vec<String> = matches
        .iter()
        .map(|food| format!("{} ({:.0} kcal/100g)", food.name, food.kcal_per_100g))
        .collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Add which food?")
        .items(&labels)
        .default(0)
        .interact()?;

    if selection < matches.len() {
        Ok(Some(matches[selection]))
    } else {
        Ok(None)
    }
}

/// Collect a manually entered food from its label values.
///
/// Optionally pre-fills the percentages from pasted label text. An
/// empty moisture answer leaves it unset so the dry-food default
/// applies.
pub fn prompt_manual_food() -> Result<ManualFoodEntry> {
    let name: String = Input::new()
        .with_prompt("Food name")
        .interact_text()?;

    let paste = Confirm::new()
        .with_prompt("Paste label text to pre-fill the values?")
        .default(false)
        .interact()?;

    let parsed = if paste {
        let text: String = Input::new()
            .with_prompt("Label text (use ';' between label lines)")
            .allow_empty(true)
            .interact_text()?;
        parse_label_text(&text.replace(';', "\n"))
    } else {
        Default::default()
    };

    let protein_pct = prompt_percent("Protein %", parsed.protein_pct)?;
    let fat_pct = prompt_percent("Fat %", parsed.fat_pct)?;
    let fibre_pct = prompt_percent("Fibre %", parsed.fibre_pct)?;
    let ash_pct = prompt_percent("Ash %", parsed.ash_pct)?;
    let moisture_pct = prompt_optional_percent("Moisture % (empty for 8% dry-food default)", parsed.moisture_pct)?;

    Ok(ManualFoodEntry {
        name,
        protein_pct,
        fat_pct,
        fibre_pct,
        ash_pct,
        moisture_pct,
    })
}

/// Prompt for a meal: name, calorie share, and per-food split.
///
/// Loops until the split totals 100% or the user gives up; returns
/// `None` on the latter.
pub fn prompt_meal(foods: &[Food]) -> Result<Option<(String, f64, DraftSplit)>> {
    let name: String = Input::new()
        .with_prompt("Meal name")
        .interact_text()?;

    let percent_input: String = Input::new()
        .with_prompt("Share of daily calories (%)")
        .default("50".to_string())
        .interact_text()?;
    let calorie_percent: f64 = percent_input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid calorie percent".to_string()))?;

    let mut draft = DraftSplit::new();
    draft.sync_foods(foods);

    loop {
        for food in foods {
            let current = draft.ratio(&food.id);
            let input: String = Input::new()
                .with_prompt(format!("  {} share (%)", food.name))
                .default(format!("{:.0}", current))
                .interact_text()?;
            let value: f64 = input.trim().parse().unwrap_or(0.0);
            draft.set_ratio(&food.id, value);
        }

        if draft.is_total_valid() {
            return Ok(Some((name, calorie_percent, draft)));
        }

        println!("Total food split is {:.0}%, must be exactly 100%.", draft.total());
        let retry = prompt_yes_no("Adjust the split?", true)?;
        if !retry {
            return Ok(None);
        }
    }
}

/// Pick one item from a list, with a cancel row. Returns the index.
pub fn prompt_pick(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    let mut items = labels.to_vec();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    if selection < labels.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Prompt for the export file path.
pub fn prompt_export_path() -> Result<String> {
    let path: String = Input::new()
        .with_prompt("Export path")
        .default("feeding_schedule.json".to_string())
        .interact_text()?;
    Ok(path)
}

/// Yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_percent(label: &str, prefill: Option<f64>) -> Result<f64> {
    let mut input = Input::new().with_prompt(label);
    if let Some(value) = prefill {
        input = input.default(value.to_string());
    }
    let raw: String = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number for {label}")))
}

fn prompt_optional_percent(label: &str, prefill: Option<f64>) -> Result<Option<f64>> {
    let mut input = Input::new().with_prompt(label).allow_empty(true);
    if let Some(value) = prefill {
        input = input.default(value.to_string());
    }
    let raw: String = input.interact_text()?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number for {label}")))
}
