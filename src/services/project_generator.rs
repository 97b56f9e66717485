use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::models::day::ProjectName;
use crate::utils::error::{Result, ScaffoldError};

/// External tool that creates a runnable project skeleton named `name` inside `parent`
#[allow(async_fn_in_trait)]
pub trait ProjectGenerator {
    async fn generate(&self, parent: &Path, name: &ProjectName) -> Result<()>;
}

/// Generator backed by an external command such as `cargo new --bin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a `[program, args...]` list as found in the configuration
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            ScaffoldError::Config("generator command cannot be empty".to_string())
        })?;

        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Human-readable command line for `name`, used in logs and errors
    pub fn command_line(&self, name: &ProjectName) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(name.as_str());
        parts.join(" ")
    }
}

impl Default for CommandGenerator {
    fn default() -> Self {
        Self::new("cargo", vec!["new".to_string(), "--bin".to_string()])
    }
}

impl ProjectGenerator for CommandGenerator {
    async fn generate(&self, parent: &Path, name: &ProjectName) -> Result<()> {
        let command_line = self.command_line(name);
        tracing::info!(command = %command_line, dir = %parent.display(), "running project generator");

        // The generator talks to the user directly; its output is not captured
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(name.as_str())
            .current_dir(parent)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::GeneratorSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::GeneratorFailed {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}
