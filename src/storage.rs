use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{DayPlan, DayRecord, Profile};

/// Load a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a recorded day (meals, workouts, condition) from a JSON file.
///
/// All sections are optional; an empty object is a valid, empty day.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<DayRecord> {
    let content = fs::read_to_string(path)?;
    let record: DayRecord = serde_json::from_str(&content)?;
    Ok(record)
}

/// Save a generated day plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &DayPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
