//! Iterator extension for folding outcomes.

use crate::compose::combine::merge_parts;
use crate::types::{Outcome, Reasons};

/// Adds [`merge`](OutcomeIterExt::merge) to every iterator of outcomes.
///
/// # Examples
///
/// ```
/// use reason_rail::traits::OutcomeIterExt;
/// use reason_rail::Outcome;
///
/// let merged = (1..=3).map(Outcome::ok_with).merge();
/// assert_eq!(merged.value(), Some(&vec![1, 2, 3]));
///
/// let untyped = vec![Outcome::ok(), Outcome::fail("disk full")].into_iter().merge().to_unit();
/// assert!(untyped.is_failed());
/// ```
pub trait OutcomeIterExt<V>: Iterator<Item = Outcome<V>> + Sized {
    /// Merges the outcomes into one.
    ///
    /// Reasons are concatenated in iteration order. The result is failed if
    /// any outcome is failed; otherwise it holds every value in order.
    fn merge(self) -> Outcome<Vec<V>> {
        let mut reasons = Reasons::new();
        let mut values = Vec::new();
        for outcome in self {
            let (outcome_reasons, value) = outcome.into_parts();
            reasons.extend(outcome_reasons);
            values.extend(value);
        }
        merge_parts(reasons, values)
    }
}

impl<V, I> OutcomeIterExt<V> for I where I: Iterator<Item = Outcome<V>> {}
