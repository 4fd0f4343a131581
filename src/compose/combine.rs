//! Folding many outcomes into one.

use crate::types::{Outcome, Reasons};

impl<V> Outcome<V> {
    /// Combines outcomes into one holding the values of all of them.
    ///
    /// The reasons of every input are concatenated in input order. The result
    /// is failed if any input is failed, in which case it holds no value;
    /// otherwise it holds the input values in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use reason_rail::Outcome;
    ///
    /// let all = Outcome::combine([Outcome::ok_with(1), Outcome::ok_with(2)]);
    /// assert_eq!(all.value(), Some(&vec![1, 2]));
    ///
    /// let some_failed = Outcome::combine([
    ///     Outcome::ok_with(1),
    ///     Outcome::fail("second input rejected"),
    ///     Outcome::ok_with(3).with_success("third input checked"),
    /// ]);
    /// assert!(some_failed.is_failed());
    /// assert_eq!(some_failed.reasons().len(), 2);
    /// ```
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<V>>
    where
        I: IntoIterator<Item = Outcome<V>>,
    {
        let outcomes = outcomes.into_iter();
        let mut reasons = Reasons::new();
        let mut values = Vec::with_capacity(outcomes.size_hint().0);

        for outcome in outcomes {
            let (outcome_reasons, value) = outcome.into_parts();
            reasons.extend(outcome_reasons);
            values.extend(value);
        }

        if reasons.is_empty() {
            return Outcome::ok_with(values);
        }
        merge_parts(reasons, values)
    }
}

/// Builds the combined outcome from concatenated reasons and collected
/// values. The values are dropped when the reasons contain an error.
#[inline]
pub(crate) fn merge_parts<V>(reasons: Reasons, values: Vec<V>) -> Outcome<Vec<V>> {
    let value = if reasons.is_success() { Some(values) } else { None };
    Outcome::from_parts(reasons, value)
}
