//! Format checks

use url::Url;

use crate::Accumulator;

impl Accumulator {
    /// Fails unless `value` parses as an absolute URL.
    ///
    /// Only the syntax is checked; nothing is fetched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let acc = validate("profile", |v| {
    ///     v.check_url("https://example.com", || "unused");
    ///     v.check_url("not a url", || "bad URL");
    /// });
    /// assert_eq!(acc.violations()[0].message(), "bad URL");
    /// ```
    pub fn check_url<'a, F, S>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        message: F,
    ) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let ok = value.into().is_some_and(|s| Url::parse(s).is_ok());
        self.check(ok, message)
    }
}
