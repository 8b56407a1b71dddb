//! The whole invocation: resolve the token, pick if needed, run.

use log::{debug, warn};

use crate::error::Result;
use crate::execution::{self, Completion, ProcessRunner};
use crate::manifest::ScriptSet;
use crate::resolution::{self, Resolution};
use crate::session::{self, Prompt};

/// How an invocation ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The manifest has no scripts, nothing was run.
    NoScripts,
    /// `script` ran to completion.
    Completed {
        script: String,
        completion: Completion,
    },
}

impl Dispatch {
    /// Code the host process should exit with.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Dispatch::NoScripts => 0,
            Dispatch::Completed { completion, .. } => completion.exit_code(),
        }
    }
}

/// Picks the script to run for `token` without running it.
///
/// Returns `None` when there are no scripts.
///
/// # Errors
///
/// Returns an error if the picker fails or is cancelled.
pub fn choose_script<P: Prompt + ?Sized>(
    scripts: &ScriptSet,
    token: Option<&str>,
    prompt: &mut P,
) -> Result<Option<String>> {
    let resolution = resolution::resolve(&scripts.names(), token);
    debug!("Resolved {:?} to: {}", token, resolution);

    match resolution {
        Resolution::Empty => {
            warn!("The manifest declares no scripts");
            Ok(None)
        }
        Resolution::DirectRun(name) => Ok(Some(name)),
        Resolution::InteractiveSearch(seed) => {
            session::select_script(scripts, &seed, prompt).map(Some)
        }
    }
}

/// Resolves `token`, asks `prompt` when the token is not decisive, and runs
/// the chosen script with `runner`.
///
/// # Errors
///
/// Returns an error if the picker is cancelled or fails, or if the script
/// cannot be started. The runner is never invoked after a cancel.
pub fn dispatch<P, R>(
    scripts: &ScriptSet,
    token: Option<&str>,
    prompt: &mut P,
    runner: &R,
) -> Result<Dispatch>
where
    P: Prompt + ?Sized,
    R: ProcessRunner + ?Sized,
{
    let Some(script) = choose_script(scripts, token, prompt)? else {
        return Ok(Dispatch::NoScripts);
    };

    let completion = execution::run_script(scripts, runner, &script)?;

    Ok(Dispatch::Completed { script, completion })
}
