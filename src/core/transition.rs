//! Configured transitions and the per-event transition table.

use super::guard::Guard;
use super::identifier::Identifier;

/// A configured move from one state to another on an event.
///
/// Transitions are immutable once constructed. Several transitions may
/// share the same source and event when mutually exclusive guards tell
/// them apart.
///
/// # Example
///
/// ```rust
/// use statenest::core::{Guard, Transition};
///
/// let dial: Transition<&str, &str, String> = Transition::guarded(
///     "off-hook",
///     "call-dialed",
///     "ringing",
///     Guard::new(|n: &String| n.starts_with("123")),
///     Some("Number is valid".to_string()),
/// );
///
/// assert_eq!(dial.target(), &"ringing");
/// assert!(dial.allows(&"123-000".to_string()));
/// assert!(!dial.allows(&"555-000".to_string()));
/// ```
#[derive(Debug)]
pub struct Transition<S, E, D> {
    source: S,
    event: E,
    target: S,
    guard: Option<Guard<D>>,
    guard_label: Option<String>,
}

impl<S: Identifier, E: Identifier, D> Transition<S, E, D> {
    /// Create an unconditional transition.
    pub fn new(source: S, event: E, target: S) -> Self {
        Self {
            source,
            event,
            target,
            guard: None,
            guard_label: None,
        }
    }

    /// Create a transition gated by a guard, with an optional display label.
    pub fn guarded(
        source: S,
        event: E,
        target: S,
        guard: Guard<D>,
        guard_label: Option<String>,
    ) -> Self {
        Self {
            source,
            event,
            target,
            guard: Some(guard),
            guard_label,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn event(&self) -> &E {
        &self.event
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    pub fn guard_label(&self) -> Option<&str> {
        self.guard_label.as_deref()
    }

    /// Check whether this transition applies to the given data.
    ///
    /// Unguarded transitions always apply.
    pub fn allows(&self, data: &D) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(data))
    }
}

/// All transitions one state declares for a single event, in declaration order.
#[derive(Debug)]
pub struct EventTransitions<S, E, D> {
    event: E,
    transitions: Vec<Transition<S, E, D>>,
}

impl<S: Identifier, E: Identifier, D> EventTransitions<S, E, D> {
    pub fn new(event: E) -> Self {
        Self {
            event,
            transitions: Vec::new(),
        }
    }

    pub fn event(&self) -> &E {
        &self.event
    }

    pub fn push(&mut self, transition: Transition<S, E, D>) {
        self.transitions.push(transition);
    }

    /// Return the first transition whose guard admits `data`.
    pub fn select(&self, data: &D) -> Option<&Transition<S, E, D>> {
        self.transitions.iter().find(|t| t.allows(data))
    }

    pub fn transitions(&self) -> &[Transition<S, E, D>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity_table() -> EventTransitions<&'static str, &'static str, u32> {
        let mut table = EventTransitions::new("go");
        table.push(Transition::guarded(
            "start",
            "go",
            "even",
            Guard::new(|n: &u32| n % 2 == 0),
            Some("is even".to_string()),
        ));
        table.push(Transition::guarded(
            "start",
            "go",
            "odd",
            Guard::new(|n: &u32| n % 2 == 1),
            None,
        ));
        table
    }

    #[test]
    fn unguarded_transition_keeps_constructor_values() {
        let transition: Transition<_, _, ()> = Transition::new("state", "event", "next");

        assert_eq!(transition.source(), &"state");
        assert_eq!(transition.event(), &"event");
        assert_eq!(transition.target(), &"next");
        assert!(!transition.is_guarded());
        assert_eq!(transition.guard_label(), None);
        assert!(transition.allows(&()));
    }

    #[test]
    fn guarded_transition_keeps_label() {
        let transition = Transition::guarded(
            "state",
            "event",
            "next",
            Guard::new(|_: &()| false),
            Some("name".to_string()),
        );

        assert!(transition.is_guarded());
        assert_eq!(transition.guard_label(), Some("name"));
        assert!(!transition.allows(&()));
    }

    #[test]
    fn select_picks_guard_that_passes() {
        let table = parity_table();

        assert_eq!(table.select(&4).map(|t| *t.target()), Some("even"));
        assert_eq!(table.select(&7).map(|t| *t.target()), Some("odd"));
    }

    #[test]
    fn select_prefers_earliest_declaration() {
        let mut table: EventTransitions<&str, &str, ()> = EventTransitions::new("go");
        table.push(Transition::guarded(
            "a",
            "go",
            "first",
            Guard::new(|_: &()| true),
            None,
        ));
        table.push(Transition::new("a", "go", "second"));

        assert_eq!(table.select(&()).map(|t| *t.target()), Some("first"));
    }

    #[test]
    fn select_returns_none_when_every_guard_rejects() {
        let mut table: EventTransitions<&str, &str, u32> = EventTransitions::new("go");
        table.push(Transition::guarded(
            "a",
            "go",
            "b",
            Guard::new(|n: &u32| *n > 100),
            None,
        ));

        assert!(table.select(&1).is_none());
        assert_eq!(table.transitions().len(), 1);
        assert_eq!(table.event(), &"go");
    }
}
