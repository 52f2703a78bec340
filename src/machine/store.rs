//! Storage for the live current state.
//!
//! The engine never touches the current state directly; it always reads and
//! writes through a [`StateStore`], so the same transition logic serves both
//! an in-process value and state that lives in some external system.

/// Where the current state lives.
pub trait StateStore<S> {
    /// Read the current state.
    fn get(&self) -> S;

    /// Replace the current state.
    fn set(&mut self, state: S);
}

/// State owned by the machine itself.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedState<S> {
    value: S,
}

impl<S> OwnedState<S> {
    pub fn new(initial: S) -> Self {
        Self { value: initial }
    }

    /// Evaluate `producer` once and own its result.
    pub fn from_producer<F>(producer: F) -> Self
    where
        F: FnOnce() -> S,
    {
        Self::new(producer())
    }
}

impl<S: Clone> StateStore<S> for OwnedState<S> {
    fn get(&self) -> S {
        self.value.clone()
    }

    fn set(&mut self, state: S) {
        self.value = state;
    }
}

/// State held elsewhere, reached through a getter and a setter.
///
/// # Example
///
/// ```rust
/// use statenest::machine::{DelegatedState, StateStore};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let record = Rc::new(RefCell::new("draft"));
/// let (read, write) = (Rc::clone(&record), Rc::clone(&record));
///
/// let mut store = DelegatedState::new(
///     move || *read.borrow(),
///     move |state| *write.borrow_mut() = state,
/// );
///
/// store.set("published");
/// assert_eq!(*record.borrow(), "published");
/// assert_eq!(store.get(), "published");
/// ```
pub struct DelegatedState<S> {
    getter: Box<dyn Fn() -> S>,
    setter: Box<dyn FnMut(S)>,
}

impl<S> DelegatedState<S> {
    pub fn new<G, W>(getter: G, setter: W) -> Self
    where
        G: Fn() -> S + 'static,
        W: FnMut(S) + 'static,
    {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }
}

impl<S> StateStore<S> for DelegatedState<S> {
    fn get(&self) -> S {
        (self.getter)()
    }

    fn set(&mut self, state: S) {
        (self.setter)(state)
    }
}
