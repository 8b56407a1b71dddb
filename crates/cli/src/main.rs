use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use runpick_cli::cli_args::Args;
use runpick_cli::picker::TerminalPrompt;
use runpick_core::config::{self, RUNNER_ENV_VAR};
use runpick_core::dispatch::{self, Dispatch};
use runpick_core::error::Result;
use runpick_core::execution::{PackageRunner, ProcessRunner};
use runpick_core::manifest::{self, ScriptSet};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn print_scripts(scripts: &ScriptSet) {
    let width = scripts.names().iter().map(|name| name.len()).max().unwrap_or(0);

    println!(
        "{}",
        scripts
            .iter()
            .map(|(name, command)| format!("{name:<width$}  {command}"))
            .join("\n")
    );
}

fn no_scripts_message(manifest_path: &Path) -> String {
    let manifest_name = manifest_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| manifest_path.display().to_string());

    format!("No scripts found in {manifest_name}.")
}

fn execute() -> Result<u8> {
    let args = Args::parse();

    let cwd = env::current_dir()?;
    let manifest_path = config::get_manifest_path(&args.manifest_path, &cwd);
    debug!("Manifest path: `{}`", manifest_path.display());

    let scripts = manifest::load_scripts(&manifest_path)?;

    if args.list {
        if scripts.is_empty() {
            println!("{}", no_scripts_message(&manifest_path));
        } else {
            print_scripts(&scripts);
        }
        return Ok(0);
    }

    let runner = PackageRunner::new(
        config::get_runner_program(&args.runner, env::var(RUNNER_ENV_VAR).ok()),
        config::manifest_directory(&manifest_path),
    );
    info!("Using runner `{}`", runner.program);

    let mut prompt = TerminalPrompt;

    if args.dry_run {
        match dispatch::choose_script(&scripts, args.script.as_deref(), &mut prompt)? {
            Some(script) => {
                println!("Would run: {}", runner.describe(&script));
                println!("Dry run is specified, exiting without executing.");
            }
            None => println!("{}", no_scripts_message(&manifest_path)),
        }
        return Ok(0);
    }

    let outcome = dispatch::dispatch(&scripts, args.script.as_deref(), &mut prompt, &runner)?;

    match &outcome {
        Dispatch::NoScripts => println!("{}", no_scripts_message(&manifest_path)),
        Dispatch::Completed { script, completion } => {
            debug!("Script `{}` finished with {:?}", script, completion.code);
        }
    }

    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
