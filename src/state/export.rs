use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{FeedingScheduleEntry, Food};
use crate::planner::calculations::EnergyRequirement;

/// Serializable snapshot of a computed plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExport<'a> {
    pub daily_rer: f64,
    pub daily_mer: f64,
    pub foods: &'a [Food],
    pub schedule: &'a [FeedingScheduleEntry],
}

impl<'a> ScheduleExport<'a> {
    pub fn new(
        requirement: EnergyRequirement,
        foods: &'a [Food],
        schedule: &'a [FeedingScheduleEntry],
    ) -> Self {
        Self {
            daily_rer: requirement.rer,
            daily_mer: requirement.mer,
            foods,
            schedule,
        }
    }
}

/// Write the computed schedule to a JSON file.
///
/// One-way: there is no load path, the plan is rebuilt per session.
pub fn write_schedule<P: AsRef<Path>>(path: P, export: &ScheduleExport) -> Result<()> {
    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, json)?;
    Ok(())
}
