// Common validation utilities for aoc-new

use crate::models::day::DayNumber;
use crate::utils::error::{Result, ScaffoldError};
use std::path::{Component, Path};

/// Earliest year the puzzle series ran
pub const FIRST_YEAR: u16 = 2015;

/// Parse the day argument, rejecting anything that is not a plain non-negative integer
pub fn validate_day_number(raw: &str) -> Result<DayNumber> {
    raw.parse::<DayNumber>()
        .map_err(|e| ScaffoldError::Validation(format!("{e}.\n\nUsage: aoc-new <day-number>\nExample: aoc-new 7")))
}

/// Validate the project name prefix; it becomes part of a directory and crate name
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(ScaffoldError::Config(
            "prefix cannot be empty".to_string(),
        ));
    }

    if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ScaffoldError::Config(format!(
            "Invalid prefix '{prefix}' (only letters, digits, '-' and '_' are allowed)"
        )));
    }

    // cargo refuses package names that start with a digit or a hyphen
    if prefix.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Err(ScaffoldError::Config(format!(
            "Invalid prefix '{prefix}' (must start with a letter or '_')"
        )));
    }

    Ok(())
}

/// Validate a name that must be a single relative path component
pub fn validate_dir_name(field: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ScaffoldError::Config(format!(
            "Invalid {field} '{name}' (must be a single directory name without separators or '..')"
        ))),
    }
}

/// Validate the year given on the command line
pub fn validate_year(year: u16) -> Result<()> {
    if year < FIRST_YEAR {
        return Err(ScaffoldError::Validation(format!(
            "Invalid year {year} (the first event was in {FIRST_YEAR})"
        )));
    }

    Ok(())
}
