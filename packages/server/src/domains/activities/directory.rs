//! In-memory activity directory.
//!
//! The set of activities is fixed when the directory is built; only rosters
//! change afterwards. Each roster sits behind its own lock so concurrent
//! signup/unregister on one activity cannot lose updates, and requests for
//! different activities never wait on each other.

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::errors::DirectoryError;
use super::models::{Activity, ActivityMap};
use super::seed;

pub struct ActivityDirectory {
    activities: IndexMap<String, RwLock<Activity>>,
}

impl ActivityDirectory {
    /// Build a directory from a seed set. Repeated emails within a roster
    /// are collapsed so each participant appears once.
    pub fn new(seed: ActivityMap) -> Self {
        let activities = seed
            .into_iter()
            .map(|(name, mut activity)| {
                activity.dedupe_participants();
                (name, RwLock::new(activity))
            })
            .collect();

        Self { activities }
    }

    /// Directory populated with the built-in Mergington seed
    pub fn with_default_seed() -> Self {
        Self::new(seed::default_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity, in seed order
    pub async fn list(&self) -> ActivityMap {
        let mut snapshot = IndexMap::with_capacity(self.activities.len());
        for (name, activity) in &self.activities {
            snapshot.insert(name.clone(), activity.read().await.clone());
        }
        debug!(count = snapshot.len(), "Listed activities");
        snapshot
    }

    pub async fn get(&self, name: &str) -> Result<Activity, DirectoryError> {
        Ok(self.entry(name)?.read().await.clone())
    }

    /// Add `email` to the roster of `name`.
    ///
    /// Returns the roster size after the signup.
    pub async fn signup(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activity = self.entry(name)?.write().await;
        if !activity.add_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        Ok(activity.participants.len())
    }

    /// Remove `email` from the roster of `name`.
    ///
    /// Returns the roster size after the removal.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activity = self.entry(name)?.write().await;
        if !activity.remove_participant(email) {
            return Err(DirectoryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        Ok(activity.participants.len())
    }

    fn entry(&self, name: &str) -> Result<&RwLock<Activity>, DirectoryError> {
        self.activities
            .get(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: name.to_string(),
            })
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
