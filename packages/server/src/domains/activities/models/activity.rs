use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity name -> record, in display order
pub type ActivityMap = IndexMap<String, Activity>;

/// An extracurricular activity and its roster.
///
/// The activity name is the key it is stored under, so it is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory only; signup does not check it. Seed files must set it above zero.
    pub max_participants: u32,
    /// Participant emails in signup order, each at most once.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        let mut activity = Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        };
        activity.dedupe_participants();
        activity
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` unless already present. Returns false on duplicate.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_registered(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// Remove `email`, keeping the order of everyone else. Returns false if absent.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Collapse repeated emails, keeping the first occurrence.
    pub(crate) fn dedupe_participants(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.participants.retain(|p| seen.insert(p.clone()));
    }
}
