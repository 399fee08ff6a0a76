pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod planner;
pub mod ui;

pub use error::{ReleaseBumpError, Result};
pub use planner::VersionPlanner;
