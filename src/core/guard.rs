//! Guard predicates for conditional transitions.
//!
//! A guard looks at the data passed to `fire` and decides whether its
//! transition applies. Guards never see the machine itself.

use std::fmt;

/// Predicate over fire data that gates a transition.
///
/// Guards are evaluated in declaration order while resolving an event;
/// the first transition whose guard passes (or that has no guard) wins.
///
/// # Example
///
/// ```rust
/// use statenest::core::Guard;
///
/// let valid_number = Guard::new(|number: &String| number.starts_with("123"));
///
/// assert!(valid_number.check(&"123-456".to_string()));
/// assert!(!valid_number.check(&"999".to_string()));
/// ```
pub struct Guard<D> {
    predicate: Box<dyn Fn(&D) -> bool>,
}

impl<D> Guard<D> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic: the machine may evaluate it
    /// once per `fire`, and a guard that flips between calls makes the
    /// resolved transition depend on evaluation timing.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&D) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard admits this data.
    pub fn check(&self, data: &D) -> bool {
        (self.predicate)(data)
    }
}

impl<D> fmt::Debug for Guard<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
