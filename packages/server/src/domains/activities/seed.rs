//! Seed data for the activity directory.

use std::path::Path;

use anyhow::{Context, Result};

use super::models::{Activity, ActivityMap};

/// The activities offered when no seed file is configured
pub fn default_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer".to_string(),
        Activity::new(
            "Team sport focusing on soccer skills and competitive play",
            "Mondays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["alex@mergington.edu"],
        ),
    );
    activities.insert(
        "Tennis Club".to_string(),
        Activity::new(
            "Individual and doubles tennis training",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["james@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Theater production and performing arts",
            "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
            25,
            &["isabella@mergington.edu", "noah@mergington.edu"],
        ),
    );

    activities
}

/// Parse a seed document shaped like the `GET /activities` response
pub fn parse_activities(json: &str) -> Result<ActivityMap> {
    let activities: ActivityMap =
        serde_json::from_str(json).context("Seed must be a JSON object of activity records")?;

    if let Some((name, _)) = activities.iter().find(|(name, _)| name.trim().is_empty()) {
        anyhow::bail!("Seed contains an activity with a blank name: {:?}", name);
    }

    if let Some((name, _)) = activities
        .iter()
        .find(|(_, activity)| activity.max_participants == 0)
    {
        anyhow::bail!("Activity {:?} must allow at least one participant", name);
    }

    Ok(activities)
}

/// Load a seed document from disk
pub fn load_activities(path: &Path) -> Result<ActivityMap> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_activities(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}
