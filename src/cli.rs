use clap::{Parser, Subcommand};

/// CatFoodPlanner — converts food labels and a cat's profile into a
/// gram-precise feeding schedule.
#[derive(Parser, Debug)]
#[command(name = "cat_food_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively build a plan: foods, profile, meals, schedule.
    Plan,

    /// List the preset food library with computed energy densities.
    Library,

    /// Compute the daily energy requirement for a weight and stage.
    Energy {
        /// Body weight in kilograms.
        #[arg(short, long)]
        weight: f64,

        /// Life stage (neutered, intact, inactive, weight_loss,
        /// weight_gain, kitten_young, kitten_old). Unknown values
        /// fall back to neutered.
        #[arg(short, long, default_value = "neutered")]
        stage: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
