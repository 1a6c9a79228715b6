//! # flexutils String Helpers (`common::strings`)
//!
//! File: cli/src/common/strings.rs
//! Author: Christi Mahu
//!
//! Small joiners for building long console messages out of readable source
//! fragments.
//!
//! ```rust
//! use flexutils::common::strings::{multiline_string, single_line_string};
//!
//! assert_eq!(single_line_string(&["a", "b"]), "a b");
//! assert_eq!(multiline_string(&["a", "b"]), "a\nb");
//! ```

/// Joins the parts with single spaces.
pub fn single_line_string<S: AsRef<str>>(parts: &[S]) -> String {
    join(parts, " ")
}

/// Joins the parts with newlines.
pub fn multiline_string<S: AsRef<str>>(parts: &[S]) -> String {
    join(parts, "\n")
}

fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_string() {
        assert_eq!(
            single_line_string(&["The script has failed", "because it exited early."]),
            "The script has failed because it exited early."
        );
        assert_eq!(single_line_string::<&str>(&[]), "");
    }

    #[test]
    fn test_multiline_string() {
        let owned = vec!["line one".to_string(), "line two".to_string()];
        assert_eq!(multiline_string(&owned), "line one\nline two");
    }
}
