//! Scalar `key = value` parameter extraction from narrative lines.
//!
//! Statistics like `Number of obs = 74` appear in free text around the
//! tables, often several to a line in a multi-column layout. The lines
//! are joined with a spacer wide enough to keep neighbouring parameters
//! from colliding, every whitespace-surrounded `=` is swapped for a
//! marker character, and the result is split on two-or-more-space runs;
//! fragments still holding the marker are the parameters.

use regex::Regex;
use std::sync::LazyLock;

use statlog_core::ParameterSet;

/// Spacer inserted between joined lines; wider than any legitimate
/// inter-parameter gap seen in real output.
const JOIN_SPACER: &str = "                      "; // 22 spaces

/// Stand-in for a whitespace-surrounded `=`. Unit separator never occurs
/// in log text, so an `=` inside a value cannot be re-split later.
const EQUALS_MARKER: char = '\u{1f}';

/// Whitespace on both sides is required: `alpha=0` inside a name and the
/// `>=` in `Prob >= chibar2` must survive untouched.
static EQUALS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+=\s+").expect("static regex must compile"));

/// Iterative-fitting progress lines carry `log likelihood = ...` noise
/// that is not a reportable parameter.
static ITERATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Iteration \d+:").expect("static regex must compile"));

static FRAGMENT_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("static regex must compile"));

/// Extracts all `name = value` parameters from the given lines.
///
/// Later occurrences of a name overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use statlog_parser::params::extract_parameters;
///
/// let lines: Vec<String> = vec!["two = 2    five = 5  x".to_string()];
/// let params = extract_parameters(&lines);
/// assert_eq!(params.get("two"), Some("2"));
/// assert_eq!(params.get("five"), Some("5"));
/// assert_eq!(params.len(), 2);
/// ```
pub fn extract_parameters(lines: &[String]) -> ParameterSet {
    let surviving: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| EQUALS_RE.is_match(line) && !ITERATION_RE.is_match(line))
        .collect();

    let joined = surviving.join(JOIN_SPACER);
    let marked = EQUALS_RE.replace_all(&joined, EQUALS_MARKER.to_string());
    let padded = format!("  {marked}  ");

    let mut params = ParameterSet::new();
    for fragment in FRAGMENT_SPLIT_RE.split(&padded) {
        let Some((name, value)) = fragment.split_once(EQUALS_MARKER) else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        // A second marker inside the value is an `=` that belonged to the
        // value text; restore it.
        let value = value.trim().replace(EQUALS_MARKER, " = ");
        params.insert(name, &value);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_parameter_padding_variants() {
        for line in [
            "  x = 5  ",
            "  x = 5",
            "x = 5  ",
            "x  x = 5  ",
            "x  x = 5  x",
            "  x = 5  x",
        ] {
            let params = extract_parameters(&lines(&[line]));
            assert_eq!(params.get("x"), Some("5"), "{line:?}");
            assert_eq!(params.len(), 1, "{line:?}");
        }
    }

    #[test]
    fn test_multiple_parameters_on_one_line() {
        let params = extract_parameters(&lines(&["two = 2    five = 5  x"]));
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("two", "2"), ("five", "5")]);
    }

    #[test]
    fn test_vertically_stacked_parameters() {
        let params = extract_parameters(&lines(&[
            "Negative binomial regression                Number of obs   =         21",
            "Dispersion     = mean                       Prob > chi2     =    0.9307",
            "Log likelihood = -108.48841                 Pseudo R2       =    0.0007",
        ]));
        assert_eq!(params.get("Number of obs"), Some("21"));
        assert_eq!(params.get("Dispersion"), Some("mean"));
        assert_eq!(params.get("Prob > chi2"), Some("0.9307"));
        assert_eq!(params.get("Log likelihood"), Some("-108.48841"));
        assert_eq!(params.get("Pseudo R2"), Some("0.0007"));
    }

    #[test]
    fn test_equals_without_surrounding_whitespace_stays_in_name() {
        let params = extract_parameters(&lines(&[
            "LR test of alpha=0: chibar2(01) =  434.62",
            "Prob >= chibar2 = 0.000",
        ]));
        assert_eq!(params.get("LR test of alpha=0: chibar2(01)"), Some("434.62"));
        assert_eq!(params.get("Prob >= chibar2"), Some("0.000"));
    }

    #[test]
    fn test_iteration_noise_is_excluded() {
        let params = extract_parameters(&lines(&[
            "Iteration 0:   log likelihood = -113.54",
            "Iteration 1:   log likelihood = -108.49",
            "Number of obs   =   21",
        ]));
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("Number of obs", "21")]);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let params = extract_parameters(&lines(&["n = 1", "n = 2"]));
        assert_eq!(params.get("n"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_no_parameters_in_plain_narrative() {
        let params = extract_parameters(&lines(&["nothing to see here", "x=y"]));
        assert!(params.is_empty());
    }
}
