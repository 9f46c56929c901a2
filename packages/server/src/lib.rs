// Mergington High School Activities - API Core
//
// This crate provides the backend API for extracurricular activity rosters:
// listing activities, signing students up, and unregistering them.
// The directory lives in memory for the life of the process.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
