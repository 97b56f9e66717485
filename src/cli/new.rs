use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::scaffold::ScaffoldPlan;
use crate::services::repository::RepositoryRoot;
use crate::services::scaffolder::Scaffolder;
use crate::utils::config::{ConfigParser, DEFAULT_MARKER};
use crate::utils::error::{Result, ScaffoldError};

/// Create the project skeleton for one puzzle day
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Day of the puzzle; padded to two digits in the project name
    #[arg(value_name = "day-number", allow_negative_numbers = true)]
    pub day: String,

    /// Put the project under a <YEAR>/ directory in the repository root
    #[arg(long, value_name = "YEAR")]
    pub year: Option<u16>,

    /// Output JSON instead of human-readable text
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print nothing on success
    #[arg(long, short)]
    pub quiet: bool,
}

/// JSON response format for a scaffold run
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub project_dir: String,
    pub input_dir: String,
    pub year: Option<u16>,
}

impl NewResponse {
    fn from_plan(plan: &ScaffoldPlan, cwd: &Path) -> Self {
        Self {
            status: "success".to_string(),
            project_name: plan.project_name.to_string(),
            project_dir: display_relative(&plan.project_dir(), cwd),
            input_dir: display_relative(&plan.input_dir(), cwd),
            year: plan.year,
        }
    }
}

impl NewCommand {
    /// Execute the command from the current working directory
    pub async fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        self.run_in(&cwd).await
    }

    /// Execute the command as if started from `cwd`
    pub async fn run_in(&self, cwd: &Path) -> Result<()> {
        let config = match ConfigParser::load_or_default(cwd) {
            Ok(config) => config,
            Err(err) => {
                // An unusable config cannot name its marker; outside a repository
                // root the location error still wins
                RepositoryRoot::locate(cwd, DEFAULT_MARKER)?;
                return Err(err);
            }
        };
        let scaffolder = Scaffolder::from_config(config)?;

        let plan = scaffolder.scaffold(cwd, &self.day, self.year).await?;

        self.report(&plan, cwd)
    }

    fn report(&self, plan: &ScaffoldPlan, cwd: &Path) -> Result<()> {
        let response = NewResponse::from_plan(plan, cwd);

        if self.json {
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                ScaffoldError::Validation(format!("Failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else if !self.quiet {
            println!("Created {}", response.project_dir);
        }

        Ok(())
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
