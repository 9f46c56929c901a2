// HTTP routes
pub mod activities;
pub mod health;
pub mod root;

pub use activities::*;
pub use health::*;
pub use root::*;
