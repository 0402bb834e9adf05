//! Regular expression values and their `/pattern/flags` literal form.
//!
//! A [`RegExp`] stores the escaped pattern source and the flag string exactly as
//! its literal prints them. Construction checks the delimiters and flags only;
//! the pattern is compiled on demand by [`RegExp::to_regex`], which rejects
//! syntax the [`regex`] engine lacks (lookaround, backreferences).
//!
//! ## Flags
//!
//! | flag | meaning | applied by `to_regex` |
//! |------|---------|-----------------------|
//! | `d` | match indices | no |
//! | `g` | global | no |
//! | `i` | case-insensitive | yes |
//! | `m` | multi-line anchors | yes |
//! | `s` | `.` matches newline | yes |
//! | `u` | unicode | always on |
//! | `v` | unicode sets | always on |
//! | `y` | sticky | no |
//!
//! Flags that describe matching state rather than the pattern (`d`, `g`, `y`)
//! are carried through unchanged.

use crate::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;

const FLAG_ORDER: &str = "dgimsuvy";
const EMPTY_SOURCE: &str = "(?:)";

/// A regular expression value.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::RegExp;
///
/// let re = RegExp::new("ab+c", "ig").unwrap();
/// assert_eq!(re.source(), "ab+c");
/// assert_eq!(re.flags(), "gi");
/// assert_eq!(re.to_string(), "/ab+c/gi");
///
/// let parsed = RegExp::from_literal("/ab+c/gi").unwrap();
/// assert_eq!(parsed, re);
/// assert!(parsed.to_regex().unwrap().is_match("xABBBCx"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Builds a regular expression from a pattern and a flag string.
    ///
    /// Unescaped `/` outside character classes and line terminators are escaped
    /// so the literal form stays parseable. Flags are reordered canonically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegExp`] for unknown or repeated flags, or for
    /// `u` combined with `v`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::RegExp;
    ///
    /// // Kept as written even though the regex engine cannot run it.
    /// let re = RegExp::new("(a)\\1", "g").unwrap();
    /// assert_eq!(re.to_string(), "/(a)\\1/g");
    /// assert!(re.to_regex().is_err());
    /// ```
    pub fn new(pattern: &str, flags: &str) -> Result<Self> {
        let source = escape_source(pattern);
        let flags = normalize_flags(&source, flags)?;
        Ok(RegExp { source, flags })
    }

    /// Parses a `/pattern/flags` literal, splitting at the last `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegExp`] if the literal has no opening or closing
    /// delimiter, or if [`RegExp::new`] rejects its parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_annotated::RegExp;
    ///
    /// let re = RegExp::from_literal("/a\\/b/m").unwrap();
    /// assert_eq!(re.source(), "a\\/b");
    /// assert_eq!(re.flags(), "m");
    ///
    /// assert!(RegExp::from_literal("ab+c").is_err());
    /// assert!(RegExp::from_literal("/ab+c").is_err());
    /// ```
    pub fn from_literal(literal: &str) -> Result<Self> {
        let close = literal.rfind('/').filter(|&i| i > 0);
        match (literal.starts_with('/'), close) {
            (true, Some(close)) => RegExp::new(&literal[1..close], &literal[close + 1..]),
            _ => Err(Error::invalid_regexp(
                literal,
                "expected a literal of the form /pattern/flags",
            )),
        }
    }

    /// The escaped pattern source, without delimiters.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags in canonical order.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns `true` if the given flag is set.
    #[must_use]
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Compiles this expression with the [`regex`] engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegExp`] if the engine rejects the pattern.
    pub fn to_regex(&self) -> Result<Regex> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.has_flag('i'))
            .multi_line(self.has_flag('m'))
            .dot_matches_new_line(self.has_flag('s'))
            .build()
            .map_err(|e| Error::invalid_regexp(&self.source, e))
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

fn escape_source(pattern: &str) -> String {
    if pattern.is_empty() {
        return EMPTY_SOURCE.to_string();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut escaped = false;
    for c in pattern.chars() {
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                out.push(c);
                escaped = true;
            }
            '[' => {
                out.push(c);
                in_class = true;
            }
            ']' => {
                out.push(c);
                in_class = false;
            }
            '/' if !in_class => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

fn normalize_flags(source: &str, flags: &str) -> Result<String> {
    let mut seen = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if !FLAG_ORDER.contains(flag) {
            return Err(Error::invalid_regexp(
                source,
                format!("invalid flag {:?}", flag),
            ));
        }
        if seen.contains(flag) {
            return Err(Error::invalid_regexp(
                source,
                format!("duplicate flag {:?}", flag),
            ));
        }
        seen.push(flag);
    }
    if seen.contains('u') && seen.contains('v') {
        return Err(Error::invalid_regexp(
            source,
            "flags 'u' and 'v' are mutually exclusive",
        ));
    }
    Ok(FLAG_ORDER.chars().filter(|f| seen.contains(*f)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_form() {
        let re = RegExp::new("ab+c", "gi").unwrap();
        assert_eq!(re.to_string(), "/ab+c/gi");
    }

    #[test]
    fn test_flags_are_canonicalized() {
        assert_eq!(RegExp::new("a", "ysmig").unwrap().flags(), "gimsy");
        assert_eq!(RegExp::new("a", "").unwrap().flags(), "");
    }

    #[test]
    fn test_bad_flags() {
        assert!(matches!(
            RegExp::new("a", "x"),
            Err(Error::InvalidRegExp { .. })
        ));
        assert!(RegExp::new("a", "gg").is_err());
        assert!(RegExp::new("a", "uv").is_err());
    }

    #[test]
    fn test_unsupported_syntax_fails_at_compile_time() {
        for literal in ["/a(?=b)/g", "/(?<!x)y/", "/(a)\\1/", "/a(/"] {
            let re = RegExp::from_literal(literal).unwrap();
            assert_eq!(re.to_string(), literal);
            let err = re.to_regex().unwrap_err();
            assert!(matches!(err, Error::InvalidRegExp { .. }), "{literal}");
        }
    }

    #[test]
    fn test_empty_pattern() {
        let re = RegExp::new("", "g").unwrap();
        assert_eq!(re.to_string(), "/(?:)/g");
        assert_eq!(RegExp::from_literal("/(?:)/g").unwrap(), re);
        assert_eq!(RegExp::from_literal("//g").unwrap(), re);
    }

    #[test]
    fn test_slash_escaping_is_idempotent() {
        let re = RegExp::new("a/b", "").unwrap();
        assert_eq!(re.source(), "a\\/b");
        assert_eq!(RegExp::new(re.source(), "").unwrap(), re);
        assert!(re.to_regex().unwrap().is_match("a/b"));

        let class = RegExp::new("[/]", "").unwrap();
        assert_eq!(class.source(), "[/]");
    }

    #[test]
    fn test_line_terminators_are_escaped() {
        let re = RegExp::new("a\nb", "").unwrap();
        assert_eq!(re.to_string(), "/a\\nb/");
        assert!(re.to_regex().unwrap().is_match("a\nb"));
    }

    #[test]
    fn test_literal_splits_at_last_slash() {
        let re = RegExp::from_literal("/a\\/b\\/c/gm").unwrap();
        assert_eq!(re.source(), "a\\/b\\/c");
        assert_eq!(re.flags(), "gm");
    }

    #[test]
    fn test_missing_delimiters() {
        assert!(RegExp::from_literal("").is_err());
        assert!(RegExp::from_literal("/").is_err());
        assert!(RegExp::from_literal("abc/").is_err());
    }

    #[test]
    fn test_flags_drive_compilation() {
        let re = RegExp::new("^b.c$", "ims").unwrap().to_regex().unwrap();
        assert!(re.is_match("a\nB\nC"));

        let plain = RegExp::new("^b.c$", "").unwrap().to_regex().unwrap();
        assert!(!plain.is_match("a\nB\nC"));
    }
}
