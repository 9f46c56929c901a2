//! Fixture directory used by the HTTP tests.

use activities_core::domains::activities::{Activity, ActivityMap};

/// Three activities with known rosters, including names with spaces.
pub fn activities() -> ActivityMap {
    let mut activities = ActivityMap::new();
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

/// `/activities/{name}/{action}?email={email}` with the name made URI-safe
pub fn roster_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        activity.replace(' ', "%20"),
        action,
        email.replace('+', "%2B")
    )
}
