use std::path::Path;
use tokio::fs;

use crate::models::scaffold::ScaffoldPlan;
use crate::services::project_generator::{CommandGenerator, ProjectGenerator};
use crate::services::repository::RepositoryRoot;
use crate::utils::config::ScaffoldConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_day_number, validate_year};

/// Creates a day's project: repository check, name derivation, generator, input directory.
///
/// Every step short-circuits on failure. Nothing created by an earlier step is rolled back.
#[derive(Debug, Clone)]
pub struct Scaffolder<G = CommandGenerator> {
    config: ScaffoldConfig,
    generator: G,
}

impl Scaffolder<CommandGenerator> {
    /// Scaffolder running the generator command named in `config`
    pub fn from_config(config: ScaffoldConfig) -> Result<Self> {
        let generator = CommandGenerator::from_argv(&config.generator)?;
        Ok(Self { config, generator })
    }
}

impl<G: ProjectGenerator> Scaffolder<G> {
    pub const fn with_generator(config: ScaffoldConfig, generator: G) -> Self {
        Self { config, generator }
    }

    pub const fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Check `cwd` and the arguments, then work out where the project goes.
    /// Has no side effects.
    pub fn plan(&self, cwd: &Path, raw_day: &str, year: Option<u16>) -> Result<ScaffoldPlan> {
        // The location guard comes before any argument interpretation
        let root = RepositoryRoot::locate(cwd, &self.config.marker)?;

        let day = validate_day_number(raw_day)?;
        if let Some(year) = year {
            validate_year(year)?;
        }

        Ok(ScaffoldPlan::new(
            root.path(),
            day,
            &self.config.prefix,
            &self.config.input_dir,
            year,
        ))
    }

    /// Scaffold the project for `raw_day` from the repository root `cwd`
    pub async fn scaffold(&self, cwd: &Path, raw_day: &str, year: Option<u16>) -> Result<ScaffoldPlan> {
        let plan = self.plan(cwd, raw_day, year)?;
        self.execute(&plan).await?;
        Ok(plan)
    }

    /// Carry out a plan: generate the project, then create its input directory
    pub async fn execute(&self, plan: &ScaffoldPlan) -> Result<()> {
        if plan.year.is_some() {
            fs::create_dir_all(&plan.parent_dir).await?;
        }

        self.generator
            .generate(&plan.parent_dir, &plan.project_name)
            .await?;

        // Non-recursive: fails when the project directory is missing or input already exists
        let input_dir = plan.input_dir();
        fs::create_dir(&input_dir).await?;
        tracing::info!(path = %input_dir.display(), "created input directory");

        Ok(())
    }
}
