// aoc-scaffold - daily project scaffolding for Advent of Code
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::day::{DayNumber, ProjectName};
pub use models::scaffold::ScaffoldPlan;
pub use services::scaffolder::Scaffolder;
pub use utils::error::{ScaffoldError, UserError};
