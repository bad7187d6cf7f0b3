//! String checks
//!
//! String values are passed as anything convertible to `Option<&str>`: a
//! `&str` directly, `Option<&str>`, or `Option<String>` via `as_deref()`.
//! Lengths are counted in `char`s.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::Accumulator;

static ALPHA: Lazy<WholeRegex> =
    Lazy::new(|| WholeRegex::new("[A-Za-z]+").expect("alpha pattern compiles"));

static ALPHANUMERIC: Lazy<WholeRegex> =
    Lazy::new(|| WholeRegex::new("[A-Za-z0-9]+").expect("alphanumeric pattern compiles"));

fn char_len(value: Option<&str>) -> Option<usize> {
    value.map(|s| s.chars().count())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// A regex that only accepts an entire input.
///
/// The pattern is compiled once as `\A(?:pattern)\z`, so builder options such
/// as case-insensitivity apply to the anchored form, and an alternation like
/// `a|ab` accepts `"ab"` even though a plain search would stop at `"a"`.
///
/// # Examples
///
/// ```
/// use tally::WholeRegex;
///
/// let code = WholeRegex::with_options("a|ab", |b| {
///     b.case_insensitive(true);
/// })
/// .unwrap();
/// assert!(code.is_match("AB"));
/// assert!(!code.is_match("abc"));
/// ```
#[derive(Debug, Clone)]
pub struct WholeRegex {
    pattern: String,
    regex: Regex,
}

impl WholeRegex {
    /// Compile `pattern` with default options.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        WholeRegex::with_options(pattern, |_| {})
    }

    /// Compile `pattern`, letting `configure` set options on the builder
    /// before the anchored regex is built.
    pub fn with_options<C>(pattern: &str, configure: C) -> Result<Self, regex::Error>
    where
        C: FnOnce(&mut RegexBuilder),
    {
        let mut builder = RegexBuilder::new(&format!(r"\A(?:{pattern})\z"));
        configure(&mut builder);
        Ok(WholeRegex {
            pattern: pattern.to_string(),
            regex: builder.build()?,
        })
    }

    /// `true` when the pattern matches all of `value`.
    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The pattern as written, without the anchors.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl FromStr for WholeRegex {
    type Err = regex::Error;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        WholeRegex::new(pattern)
    }
}

impl fmt::Display for WholeRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Accumulator {
    /// Fails unless `value` is missing, empty, or whitespace only.
    pub fn check_blank<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(is_blank(value.into()), message)
    }

    /// Fails when `value` is missing, empty, or whitespace only.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let acc = validate("form", |v| {
    ///     v.check_not_blank("  ", || "name is required");
    ///     v.check_not_blank(Some("Ada"), || "unused");
    /// });
    /// assert_eq!(acc.len(), 1);
    /// ```
    pub fn check_not_blank<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(!is_blank(value.into()), message)
    }

    /// Fails when `value` is missing or shorter than `min` chars.
    pub fn check_min_length<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        min: usize,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = char_len(value.into()).is_some_and(|len| len >= min);
        self.check(ok, message)
    }

    /// Fails when `value` is missing or longer than `max` chars.
    ///
    /// An empty string has length zero and passes.
    pub fn check_max_length<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        max: usize,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = char_len(value.into()).is_some_and(|len| len <= max);
        self.check(ok, message)
    }

    /// Fails when `value` is missing or not exactly `len` chars.
    pub fn check_exact_length<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        len: usize,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = char_len(value.into()) == Some(len);
        self.check(ok, message)
    }

    /// Fails when `value` is missing or its length is outside `min..=max`.
    pub fn check_length<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        min: usize,
        max: usize,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = char_len(value.into()).is_some_and(|len| (min..=max).contains(&len));
        self.check(ok, message)
    }

    /// Fails when `value` is missing or does not contain `fragment`.
    pub fn check_contains<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        fragment: &str,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| s.contains(fragment));
        self.check(ok, message)
    }

    /// Fails when `value` is missing or does not start with `prefix`.
    pub fn check_starts_with<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        prefix: &str,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| s.starts_with(prefix));
        self.check(ok, message)
    }

    /// Fails when `value` is missing or does not end with `suffix`.
    pub fn check_ends_with<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        suffix: &str,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| s.ends_with(suffix));
        self.check(ok, message)
    }

    /// Fails when `value` is missing or `regex` does not match the whole of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::{validate, WholeRegex};
    ///
    /// let digits = WholeRegex::new(r"\d+").unwrap();
    /// let acc = validate("code", |v| {
    ///     v.check_matches_regex("12345", &digits, || "unused");
    ///     v.check_matches_regex("12a", &digits, || "must be digits");
    /// });
    /// assert_eq!(acc.violations()[0].message(), "must be digits");
    /// ```
    pub fn check_matches_regex<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        regex: &WholeRegex,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| regex.is_match(s));
        self.check(ok, message)
    }

    /// Fails when `value` is missing or no pattern in `regexes` matches the whole of it.
    pub fn check_matches_any_regex<'a, I, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        regexes: I,
        message: F,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<WholeRegex>,
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value
            .into()
            .is_some_and(|s| regexes.into_iter().any(|re| re.borrow().is_match(s)));
        self.check(ok, message)
    }

    /// Fails unless `value` is one or more ASCII letters.
    pub fn check_alpha<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| ALPHA.is_match(s));
        self.check(ok, message)
    }

    /// Fails unless `value` is one or more ASCII letters or digits.
    pub fn check_alphanumeric<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| ALPHANUMERIC.is_match(s));
        self.check(ok, message)
    }
}
