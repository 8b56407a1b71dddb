//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the runpick CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use runpick_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rp", "lint"]);
/// assert_eq!(args.script.as_deref(), Some("lint"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(version, about, term_width = 0)]
pub struct Args {
    /// Path to the manifest declaring the scripts.
    ///
    /// If not provided, defaults to `package.json` in the current directory.
    #[arg(long, short = 'm')]
    pub manifest_path: Option<String>,

    /// Program that runs the script as `<RUNNER> run <SCRIPT>`.
    ///
    /// If not provided, falls back to `$RUNPICK_RUNNER`, then to `npm`.
    #[arg(long, short = 'r')]
    pub runner: Option<String>,

    /// List the scripts of the manifest and exit without running anything.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Perform a dry run, which just prints out the command but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Name, or part of a name, of the script to run.
    ///
    /// A unique match runs right away; otherwise the picker opens with this
    /// text as its filter.
    #[arg(num_args(1))]
    pub script: Option<String>,
}
