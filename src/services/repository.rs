use std::path::{Path, PathBuf};

use crate::utils::error::{Result, ScaffoldError};

/// A directory that has been checked to be the root of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRoot {
    path: PathBuf,
}

impl RepositoryRoot {
    /// Whether `marker` (a file or a directory) exists directly inside `dir`.
    /// Worktrees and submodules use a `.git` file, so both kinds count.
    pub fn has_marker(dir: &Path, marker: &str) -> bool {
        dir.join(marker).exists()
    }

    /// Accept `dir` as the repository root if it carries the marker
    pub fn locate(dir: &Path, marker: &str) -> Result<Self> {
        if !Self::has_marker(dir, marker) {
            return Err(ScaffoldError::Location(format!(
                "must be run from the root of a repository: no '{}' found in {}",
                marker,
                dir.display()
            )));
        }

        tracing::debug!(root = %dir.display(), marker, "repository root found");
        Ok(Self {
            path: dir.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
