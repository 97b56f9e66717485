// CLI module for command-line interface

pub mod new;

use clap::Parser;
use std::ffi::OsString;

use crate::utils::error::{Result, ScaffoldError, UserError};

use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "aoc-new")]
#[command(about = "Scaffold the project directory for an Advent of Code puzzle day")]
#[command(long_about = r#"Scaffold the project directory for an Advent of Code puzzle day.

Runs `cargo new --bin aoc<NN>` in the repository root, where <NN> is the day
zero-padded to two digits, then creates an empty aoc<NN>/input directory for
the puzzle input. Must be run from the root of a repository (a directory
containing .git).

An optional aoc-scaffold.toml in the repository root can change the name
prefix, the repository marker, the input directory name and the generator
command.

Examples:
  aoc-new 7                 Create aoc07/ and aoc07/input/
  aoc-new 12 --year 2018    Create 2018/aoc12/ and 2018/aoc12/input/
  aoc-new 3 --json          Report the created paths as JSON"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: NewCommand,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: NewCommand) -> Result<()> {
        command.run().await
    }
}

/// Parse `args` (including the program name), run the scaffold and return the process exit code.
///
/// Errors are printed to stderr. Help and version output go to stdout and exit with 0.
pub async fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return 0;
        }
        Err(err) => {
            let usage = ScaffoldError::Usage(err.render().to_string());
            return report_failure(&usage);
        }
    };

    match CliDispatcher::execute(cli.command).await {
        Ok(()) => 0,
        Err(err) => report_failure(&err),
    }
}

fn report_failure(err: &ScaffoldError) -> i32 {
    tracing::debug!(error = ?err, "scaffold failed");
    let user_error = UserError::from_scaffold_error(err);
    user_error.print();
    user_error.exit_code
}
