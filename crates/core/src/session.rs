//! Interactive script selection.
//!
//! The picker itself lives behind the [`Prompt`] trait so that the search
//! flow can be driven by the terminal UI in the binary or by a scripted
//! prompt in tests. The prompt asks [`SearchRequest::source`] for the
//! matching choices every time the query changes.

use log::debug;

use crate::error::{Error, Result};
use crate::manifest::ScriptSet;
use crate::matcher;

/// Message shown above the picker
pub const SELECT_MESSAGE: &str = "Select a script to run:";

/// One selectable entry of the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Script name handed back when the entry is confirmed
    pub value: String,
    /// Text shown for the entry
    pub display_name: String,
}

/// Everything a prompt needs to run one search.
pub struct SearchRequest<'a> {
    pub message: &'a str,
    /// Query typed in before the user does anything
    pub seed: &'a str,
    pub source: &'a dyn Fn(&str) -> Vec<Choice>,
}

impl SearchRequest<'_> {
    /// Choices matching `query`.
    #[must_use]
    pub fn choices(&self, query: &str) -> Vec<Choice> {
        (self.source)(query)
    }
}

/// How the user left the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    Selected(String),
    Cancelled,
}

/// A picker able to run a [`SearchRequest`] to completion.
pub trait Prompt {
    /// Shows the picker and blocks until the user confirms or cancels.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker cannot talk to the terminal.
    fn search(&mut self, request: &SearchRequest<'_>) -> Result<PromptAnswer>;
}

/// The choices for `query`: every script whose name contains it, ignoring case.
#[must_use]
pub fn script_choices(scripts: &ScriptSet, query: &str) -> Vec<Choice> {
    let names = scripts.names();

    matcher::filter(&names, Some(query))
        .into_iter()
        .map(|name| Choice {
            value: name.to_string(),
            display_name: match scripts.command(name) {
                Some(command) => format!("{name} ({command})"),
                None => name.to_string(),
            },
        })
        .collect()
}

/// Lets the user pick a script, starting from `seed`.
///
/// # Errors
///
/// Returns [`Error::UserCancelled`] if the picker was cancelled,
/// [`Error::ScriptNotFound`] if the prompt answered with a name that is not
/// in `scripts`, or whatever error the prompt itself raised.
pub fn select_script<P: Prompt + ?Sized>(
    scripts: &ScriptSet,
    seed: &str,
    prompt: &mut P,
) -> Result<String> {
    let source = |query: &str| script_choices(scripts, query);
    let request = SearchRequest {
        message: SELECT_MESSAGE,
        seed,
        source: &source,
    };

    debug!("Opening picker with seed `{}`", seed);

    match prompt.search(&request)? {
        PromptAnswer::Selected(name) if scripts.contains(&name) => Ok(name),
        PromptAnswer::Selected(name) => Err(Error::ScriptNotFound(name)),
        PromptAnswer::Cancelled => Err(Error::UserCancelled),
    }
}
