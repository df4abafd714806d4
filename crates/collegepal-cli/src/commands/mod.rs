pub mod config;
pub mod db;
pub mod note;
pub mod planner;
pub mod profile;
pub mod stats;
pub mod task;
pub mod timer;
