use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::config::DEFAULT_RUNNER;
use crate::error::{Error, Result};
use crate::manifest::ScriptSet;

/// Exit code used when the child reports none of its own
pub const FAILURE_EXIT_CODE: u8 = 1;

/// How a finished script process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The child's exit code, `None` when it was terminated by a signal
    pub code: Option<i32>,
}

impl Completion {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Code the host process should exit with.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.code
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(FAILURE_EXIT_CODE)
    }
}

/// Something able to run a named script to completion.
pub trait ProcessRunner {
    /// Human readable form of the command that runs `script`.
    fn describe(&self, script: &str) -> String;

    /// Runs `script` with the terminal's streams attached and waits for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or waited on.
    fn run(&self, script: &str) -> Result<Completion>;
}

/// Runs scripts through a package manager as `<program> run <script>`.
#[derive(Debug, Clone)]
pub struct PackageRunner {
    pub program: String,
    pub working_directory: Option<PathBuf>,
}

impl Default for PackageRunner {
    fn default() -> Self {
        Self {
            program: DEFAULT_RUNNER.to_string(),
            working_directory: None,
        }
    }
}

impl PackageRunner {
    pub fn new(program: String, working_directory: Option<PathBuf>) -> Self {
        Self {
            program,
            working_directory,
        }
    }

    fn command(&self, script: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(["run", script]);

        if let Some(working_directory) = &self.working_directory {
            command.current_dir(working_directory);
        }

        command
    }
}

impl ProcessRunner for PackageRunner {
    fn describe(&self, script: &str) -> String {
        format!("{} run {}", self.program, script)
    }

    fn run(&self, script: &str) -> Result<Completion> {
        let mut command = self.command(script);
        let command = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command
            .spawn()
            .map_err(|e| Error::spawn_error(self.program.clone(), e))?;

        let exit_status = child.wait().map_err(Error::SubProcessWait)?;

        Ok(Completion {
            code: exit_status.code(),
        })
    }
}

/// Runs the script called `name` and reports how it ended.
///
/// # Errors
///
/// Returns [`Error::ScriptNotFound`] if `name` is not declared in `scripts`,
/// otherwise whatever the runner fails with. Nothing is retried.
pub fn run_script<R: ProcessRunner + ?Sized>(
    scripts: &ScriptSet,
    runner: &R,
    name: &str,
) -> Result<Completion> {
    if !scripts.contains(name) {
        return Err(Error::ScriptNotFound(name.to_string()));
    }

    let description = runner.describe(name);
    info!("Spawning `{}`", description);
    println!("Running: {description}");

    let completion = runner.run(name)?;
    if !completion.success() {
        warn!("`{}` ended with {:?}", description, completion.code);
    }

    Ok(completion)
}
