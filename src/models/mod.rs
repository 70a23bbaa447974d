mod food;
mod meal;
mod profile;
mod schedule;

pub use food::Food;
pub use meal::{Meal, SplitEntry};
pub use profile::{CatProfile, LifeStage};
pub use schedule::{FeedingScheduleEntry, FoodAmount};
