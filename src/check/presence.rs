//! Presence checks

use crate::Accumulator;

impl Accumulator {
    /// Fails when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally::validate;
    ///
    /// let order_id: Option<String> = None;
    /// let acc = validate("order", |v| {
    ///     v.check_not_null(&order_id, || "Order ID must not be null");
    /// });
    /// assert_eq!(acc.violations()[0].message(), "Order ID must not be null");
    /// ```
    pub fn check_not_null<T, F, S>(&mut self, value: &Option<T>, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(value.is_some(), message)
    }

    /// Fails when `value` is `Some`.
    pub fn check_null<T, F, S>(&mut self, value: &Option<T>, message: F) -> &mut Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(value.is_none(), message)
    }
}

#[cfg(test)]
mod tests {
    use crate::validate_to_result;

    #[test]
    fn test_check_not_null() {
        let result = validate_to_result("failed", |v| {
            v.check_not_null(&None::<&str>, || "This is failure test case");
        });
        assert_eq!(
            result.unwrap_err().to_string(),
            "failed - This is failure test case"
        );

        let result = validate_to_result("ok", |v| {
            v.check_not_null(&Some("Test Value"), || "unused");
        });
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn test_check_null() {
        assert_eq!(
            validate_to_result("ok", |v| {
                v.check_null(&None::<i32>, || "must be null");
            }),
            Ok(true)
        );
        assert_eq!(
            validate_to_result("fail", |v| {
                v.check_null(&Some("value"), || "must be null");
            })
            .unwrap_err()
            .to_string(),
            "fail - must be null"
        );
    }
}
