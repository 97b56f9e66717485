// Common error types for aoc-scaffold

use thiserror::Error;

/// Everything that can stop a scaffold run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Wrong argument count or unparseable command line
    #[error("{0}")]
    Usage(String),

    /// Not run from the root of a repository
    #[error("{0}")]
    Location(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The project generator ran but exited unsuccessfully
    #[error("`{command}` failed with {}", describe_exit(.code))]
    GeneratorFailed { command: String, code: Option<i32> },

    /// The project generator could not be launched at all
    #[error("could not run `{command}`: {source}")]
    GeneratorSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Exit code used for every failure the scaffolder itself detects
pub const FAILURE_EXIT_CODE: i32 = 1;

/// An error ready to be shown to the user, with the process exit code it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    /// Convert a scaffold error into its user-facing form
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let exit_code = match err {
            // Propagate whatever the generator reported; a signal has no code
            ScaffoldError::GeneratorFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => FAILURE_EXIT_CODE,
        };

        // Usage text comes pre-rendered by clap, including its own "error:" line
        let message = match err {
            ScaffoldError::Usage(text) => text.trim_end().to_string(),
            other => format!("error: {other}"),
        };

        Self { message, exit_code }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
