pub mod directory;
pub mod errors;
pub mod models;
pub mod seed;

// Re-export commonly used types
pub use directory::ActivityDirectory;
pub use errors::DirectoryError;
pub use models::{Activity, ActivityMap};
