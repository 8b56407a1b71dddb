//! Deciding what to do with the script token given on the command line.

use std::fmt::{Display, Formatter};

use crate::matcher;

/// What an invocation should do once the scripts and token are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Run this script without asking.
    DirectRun(String),
    /// Open the picker with this filter already typed in.
    InteractiveSearch(String),
    /// The manifest declares no scripts.
    Empty,
}

impl Display for Resolution {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::DirectRun(name) => write!(formatter, "run `{name}`"),
            Resolution::InteractiveSearch(seed) if seed.is_empty() => {
                formatter.write_str("search all scripts")
            }
            Resolution::InteractiveSearch(seed) => write!(formatter, "search for `{seed}`"),
            Resolution::Empty => formatter.write_str("no scripts"),
        }
    }
}

/// Resolves a token against the available script names.
///
/// In order: no names gives [`Resolution::Empty`]; no token (or an empty one)
/// opens an unseeded search; a case-insensitive exact match runs that
/// script; a token contained in exactly one name runs that script; anything
/// else opens a search seeded with the token.
///
/// # Examples
///
/// ```
/// use runpick_core::resolution::{resolve, Resolution};
///
/// let names = ["start", "test", "build", "dev", "lint"];
/// assert_eq!(resolve(&names, Some("lin")), Resolution::DirectRun("lint".to_string()));
/// assert_eq!(resolve(&names, Some("t")), Resolution::InteractiveSearch("t".to_string()));
/// ```
pub fn resolve<S: AsRef<str>>(names: &[S], token: Option<&str>) -> Resolution {
    if names.is_empty() {
        return Resolution::Empty;
    }

    let Some(token) = token.filter(|token| !token.is_empty()) else {
        return Resolution::InteractiveSearch(String::new());
    };

    let lowercase_token = token.to_lowercase();
    if let Some(exact) = names
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|name| name.to_lowercase() == lowercase_token)
    {
        return Resolution::DirectRun(exact.to_string());
    }

    match matcher::filter(names, Some(token)).as_slice() {
        [single] => Resolution::DirectRun((*single).to_string()),
        _ => Resolution::InteractiveSearch(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["start", "test", "build", "dev", "lint"];

    #[test]
    fn test_resolve_empty_names() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&empty, None), Resolution::Empty);
        assert_eq!(resolve(&empty, Some("")), Resolution::Empty);
        assert_eq!(resolve(&empty, Some("test")), Resolution::Empty);
    }

    #[test]
    fn test_resolve_without_token() {
        assert_eq!(
            resolve(&["start", "test"], None),
            Resolution::InteractiveSearch(String::new())
        );
        assert_eq!(
            resolve(&["start", "test"], Some("")),
            Resolution::InteractiveSearch(String::new())
        );
    }

    #[test]
    fn test_resolve_unique_substring() {
        assert_eq!(
            resolve(&NAMES, Some("dev")),
            Resolution::DirectRun("dev".to_string())
        );
        assert_eq!(
            resolve(&NAMES, Some("lin")),
            Resolution::DirectRun("lint".to_string())
        );
        assert_eq!(
            resolve(&NAMES, Some("UIL")),
            Resolution::DirectRun("build".to_string())
        );
    }

    #[test]
    fn test_resolve_ambiguous_token() {
        assert_eq!(
            resolve(&NAMES, Some("t")),
            Resolution::InteractiveSearch("t".to_string())
        );
    }

    #[test]
    fn test_resolve_no_match_seeds_search() {
        assert_eq!(
            resolve(&NAMES, Some("deploy")),
            Resolution::InteractiveSearch("deploy".to_string())
        );
    }

    #[test]
    fn test_resolve_exact_match_beats_ambiguity() {
        assert_eq!(
            resolve(&["start", "test"], Some("test")),
            Resolution::DirectRun("test".to_string())
        );

        // "t" is contained in every name, but a script is literally called "t"
        assert_eq!(
            resolve(&["t", "test", "start"], Some("t")),
            Resolution::DirectRun("t".to_string())
        );
    }

    #[test]
    fn test_resolve_exact_match_ignores_case() {
        assert_eq!(
            resolve(&["Build", "build:prod"], Some("BUILD")),
            Resolution::DirectRun("Build".to_string())
        );
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::DirectRun("dev".to_string()).to_string(), "run `dev`");
        assert_eq!(
            Resolution::InteractiveSearch(String::new()).to_string(),
            "search all scripts"
        );
        assert_eq!(
            Resolution::InteractiveSearch("t".to_string()).to_string(),
            "search for `t`"
        );
        assert_eq!(Resolution::Empty.to_string(), "no scripts");
    }
}
