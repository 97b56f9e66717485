use std::path::{Path, PathBuf};

use crate::models::day::{DayNumber, ProjectName};

/// Where a day's project will be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub day: DayNumber,
    pub project_name: ProjectName,
    /// Directory the generator runs in; the repository root or its year directory
    pub parent_dir: PathBuf,
    pub year: Option<u16>,
    input_dir_name: String,
}

impl ScaffoldPlan {
    pub fn new(
        root: &Path,
        day: DayNumber,
        prefix: &str,
        input_dir_name: &str,
        year: Option<u16>,
    ) -> Self {
        let parent_dir = match year {
            Some(year) => root.join(year.to_string()),
            None => root.to_path_buf(),
        };

        Self {
            day,
            project_name: day.project_name(prefix),
            parent_dir,
            year,
            input_dir_name: input_dir_name.to_string(),
        }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.parent_dir.join(&self.project_name)
    }

    pub fn input_dir(&self) -> PathBuf {
        self.project_dir().join(&self.input_dir_name)
    }
}
