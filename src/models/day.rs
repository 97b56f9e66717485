use std::fmt;
use std::str::FromStr;

/// Default prefix of every generated project name
pub const DEFAULT_PREFIX: &str = "aoc";

/// Numeric identifier of a single exercise day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(u32);

impl DayNumber {
    pub const fn new(day: u32) -> Self {
        Self(day)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Derive the project name for this day, e.g. `aoc` + 3 -> `aoc03`.
    ///
    /// Days below 10 are padded to two digits; larger days keep every digit.
    pub fn project_name(self, prefix: &str) -> ProjectName {
        ProjectName(format!("{}{:02}", prefix, self.0))
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a day argument is not a non-negative integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayError {
    input: String,
}

impl fmt::Display for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid day number '{}' (must be a non-negative integer)",
            self.input
        )
    }
}

impl std::error::Error for ParseDayError {}

impl FromStr for DayNumber {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u32 parsing would also accept a leading '+'
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDayError { input: s.to_string() });
        }

        s.parse::<u32>()
            .map(Self)
            .map_err(|_| ParseDayError { input: s.to_string() })
    }
}

/// Name of a generated project directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for ProjectName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
