//! Case-insensitive name matching shared by resolution and the picker.

/// True when `name` contains `token`, ignoring case.
#[must_use]
pub fn matches(name: &str, token: &str) -> bool {
    name.to_lowercase().contains(&token.to_lowercase())
}

/// Keeps the names that contain `token`, ignoring case, in their original order.
///
/// An absent or empty token keeps every name. Duplicates are kept as given.
///
/// # Examples
///
/// ```
/// use runpick_core::matcher::filter;
///
/// let names = ["start", "test", "build"];
/// assert_eq!(filter(&names, Some("T")), vec!["start", "test"]);
/// assert_eq!(filter(&names, None), vec!["start", "test", "build"]);
/// ```
pub fn filter<'a, S: AsRef<str>>(names: &'a [S], token: Option<&str>) -> Vec<&'a str> {
    let names = names.iter().map(AsRef::<str>::as_ref);

    match token.filter(|token| !token.is_empty()) {
        None => names.collect(),
        Some(token) => names.filter(|name| matches(name, token)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["start", "test", "build", "dev", "lint"];

    #[test]
    fn test_filter_empty_token_keeps_everything() {
        assert_eq!(filter(&NAMES, Some("")), NAMES.to_vec());
        assert_eq!(filter(&NAMES, None), NAMES.to_vec());
    }

    #[test]
    fn test_filter_substring_match() {
        assert_eq!(filter(&NAMES, Some("t")), vec!["start", "test", "lint"]);
        assert_eq!(filter(&NAMES, Some("ui")), vec!["build"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let names = ["Build:Prod", "build:dev", "TEST"];
        assert_eq!(filter(&names, Some("BUILD")), vec!["Build:Prod", "build:dev"]);
        assert_eq!(filter(&names, Some("test")), vec!["TEST"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter(&NAMES, Some("deploy")).is_empty());
    }

    #[test]
    fn test_filter_result_is_subsequence_of_input() {
        for token in ["s", "e", "li", "x", "D"] {
            let result = filter(&NAMES, Some(token));
            let mut remaining = NAMES.iter();
            for name in &result {
                assert!(matches(name, token));
                assert!(remaining.any(|candidate| candidate == name));
            }
        }
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let names = vec!["lint".to_string(), "lint".to_string(), "test".to_string()];
        assert_eq!(filter(&names, Some("lin")), vec!["lint", "lint"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let first = filter(&NAMES, Some("t"));
        let second = filter(&NAMES, Some("t"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches() {
        assert!(matches("Lint:Fix", "lint"));
        assert!(matches("anything", ""));
        assert!(!matches("dev", "prod"));
    }
}
