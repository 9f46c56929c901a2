use thiserror::Error;

/// Failures of roster operations against the activity directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}
