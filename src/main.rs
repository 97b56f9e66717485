// aoc-new - scaffold an Advent of Code day
// Main CLI entry point

use aoc_scaffold::cli;
use aoc_scaffold::utils::logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let exit_code = cli::run(std::env::args_os()).await;

    process::exit(exit_code);
}
