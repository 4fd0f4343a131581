//! Search over error cause trees.
//!
//! An outcome's errors are the roots of a forest: every [`Error`] may carry
//! causing errors, which may carry their own. The searches here look at one
//! level at a time:
//!
//! 1. every error of the current level is tested; if any match, the matches
//!    of that level are the result and nothing below is visited;
//! 2. otherwise the causes of each error of the level are searched in turn,
//!    depth first and left to right, and the first non-empty result wins;
//! 3. if no error matches at any depth, the result is empty.
//!
//! Successes have no children, so [`find_successes`] only scans the list it is
//! given.
//!
//! The cost is proportional to the part of the tree actually visited, and to
//! the whole tree when nothing matches.
//!
//! # Examples
//!
//! ```
//! use reason_rail::types::reason_tree::find_errors;
//! use reason_rail::Error;
//!
//! let errors = [
//!     Error::new("request failed").caused_by(Error::new("timeout")),
//!     Error::new("retry failed").caused_by(Error::new("timeout")),
//! ];
//!
//! // the first subtree with a match wins
//! let found = find_errors(&errors, |e| e.message() == "timeout");
//! assert_eq!(found.len(), 1);
//! assert!(std::ptr::eq(found[0], &errors[0].reasons()[0]));
//! ```

use std::error::Error as StdError;

use crate::types::{Error, Success};

/// Finds the errors matching `predicate`, using the level-by-level rule of the
/// module docs.
pub fn find_errors<'a, I, P>(errors: I, predicate: P) -> Vec<&'a Error>
where
    I: IntoIterator<Item = &'a Error>,
    I::IntoIter: Clone,
    P: Fn(&Error) -> bool,
{
    search(errors.into_iter(), &predicate)
}

/// Finds the exceptional errors whose exception is a `K` satisfying
/// `predicate`.
pub fn find_exceptions<'a, K, I, P>(errors: I, predicate: P) -> Vec<&'a Error>
where
    K: StdError + 'static,
    I: IntoIterator<Item = &'a Error>,
    I::IntoIter: Clone,
    P: Fn(&K) -> bool,
{
    let matches = |error: &Error| {
        error
            .exception()
            .and_then(|exception| exception.downcast_ref::<K>())
            .is_some_and(&predicate)
    };
    search(errors.into_iter(), &matches)
}

/// Finds the successes matching `predicate`. Not recursive.
pub fn find_successes<'a, I, P>(successes: I, predicate: P) -> Vec<&'a Success>
where
    I: IntoIterator<Item = &'a Success>,
    P: Fn(&Success) -> bool,
{
    successes.into_iter().filter(|success| predicate(success)).collect()
}

fn search<'a, I, P>(level: I, predicate: &P) -> Vec<&'a Error>
where
    I: Iterator<Item = &'a Error> + Clone,
    P: Fn(&Error) -> bool,
{
    let direct: Vec<&'a Error> = level.clone().filter(|error| predicate(error)).collect();
    if !direct.is_empty() {
        return direct;
    }

    for error in level {
        let nested = search(error.reasons().iter(), predicate);
        if !nested.is_empty() {
            return nested;
        }
    }

    Vec::new()
}
