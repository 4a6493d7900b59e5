//! Numeric-aware ordering for version and build strings.
//!
//! Version strings like "1.10" and "1.9" do not order correctly under
//! plain byte comparison. This module compares embedded digit runs by
//! integer value instead, so "1.10" ranks above "1.9".

use std::cmp::Ordering;

/// A maximal run of either digits or non-digits within a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Number(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if numeric {
            Run::Number(run)
        } else {
            Run::Text(run)
        })
    }
}

fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

/// Compares two digit runs by integer value without parsing.
///
/// Leading zeros are stripped first; the longer remaining run is the
/// larger number, and equal-length runs order lexicographically. Works
/// for digit runs of any length.
fn compare_digits(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

/// Compares two strings with digit runs ordered numerically.
///
/// Corresponding runs are compared in sequence: digit runs by integer
/// value, other runs byte-lexicographically. A string that is a run
/// prefix of the other ranks lower, so `""` ranks below everything and
/// `"1"` ranks below `"1.0"`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use versiongate::numeric_compare;
///
/// assert_eq!(numeric_compare("1.9", "1.10"), Ordering::Less);
/// assert_eq!(numeric_compare("2.0", "2.0"), Ordering::Equal);
/// assert_eq!(numeric_compare("", "0.1"), Ordering::Less);
/// ```
pub fn numeric_compare(lhs: &str, rhs: &str) -> Ordering {
    let mut left = runs(lhs);
    let mut right = runs(rhs);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Number(a)), Some(Run::Number(b))) => compare_digits(a, b),
            // Text runs and mixed-kind pairs compare by byte order.
            (Some(a), Some(b)) => raw(a).cmp(raw(b)),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn raw<'a>(run: Run<'a>) -> &'a str {
    match run {
        Run::Number(s) | Run::Text(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs_compare_numerically() {
        assert_eq!(numeric_compare("1.9", "1.10"), Ordering::Less);
        assert_eq!(numeric_compare("1.10", "1.9"), Ordering::Greater);
        assert_eq!(numeric_compare("0.9.1", "0.10.0"), Ordering::Less);
    }

    #[test]
    fn test_equal_versions() {
        assert_eq!(numeric_compare("1.2.3", "1.2.3"), Ordering::Equal);
        assert_eq!(numeric_compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_ranks_lower() {
        assert_eq!(numeric_compare("1", "1.0"), Ordering::Less);
        assert_eq!(numeric_compare("1.2", "1.2.1"), Ordering::Less);
        assert_eq!(numeric_compare("", "0"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(numeric_compare("1.02", "1.2"), Ordering::Equal);
        assert_eq!(numeric_compare("1.010", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_long_digit_runs() {
        let big = "9".repeat(40);
        let bigger = format!("1{}", "0".repeat(40));
        assert_eq!(numeric_compare(&big, &bigger), Ordering::Less);
    }

    #[test]
    fn test_text_suffixes() {
        assert_eq!(numeric_compare("1.0b2", "1.0b10"), Ordering::Less);
        assert_eq!(numeric_compare("1.0a", "1.0b"), Ordering::Less);
        assert_eq!(numeric_compare("1.0", "1.0b1"), Ordering::Less);
    }
}
