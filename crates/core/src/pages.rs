//! Parsing of the free-form page list typed by a user.

use std::collections::HashSet;

/// Page list used when the user does not supply one.
pub const DEFAULT_PAGES: &str = "47,48";

/// Parse a comma-separated list of page numbers.
///
/// Tokens are trimmed; anything that is not a plain run of ASCII digits (or
/// does not fit a `usize`) is dropped without a report, as are repeats of a
/// page already listed. The order of first occurrence is kept.
///
/// ```
/// use rubric_core::parse_page_numbers;
///
/// assert_eq!(parse_page_numbers("3, abc, 7"), vec![3, 7]);
/// ```
pub fn parse_page_numbers(input: &str) -> Vec<usize> {
    let mut seen = HashSet::new();

    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|page| seen.insert(*page))
        .collect()
}
