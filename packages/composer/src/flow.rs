//! Control Flow
//!
//! Early exit is a successful outcome, not an error. Hooks and collaborators
//! report it through [`Interrupt::Redirect`] so `?` can carry it up the
//! recursion; the public entry points turn it back into
//! [`Outcome::ShortCircuit`] so callers have to match on it.

use crate::error::ComposeError;

/// Result of a pass that may have been abandoned in favour of an alternate
/// result of type `R`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, R> {
    Continue(T),
    ShortCircuit(R),
}

impl<T, R> Outcome<T, R> {
    pub fn is_short_circuit(&self) -> bool {
        matches!(self, Outcome::ShortCircuit(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, R> {
        match self {
            Outcome::Continue(value) => Outcome::Continue(f(value)),
            Outcome::ShortCircuit(alternate) => Outcome::ShortCircuit(alternate),
        }
    }

    pub fn continued(self) -> Option<T> {
        match self {
            Outcome::Continue(value) => Some(value),
            Outcome::ShortCircuit(_) => None,
        }
    }

    pub fn short_circuited(self) -> Option<R> {
        match self {
            Outcome::Continue(_) => None,
            Outcome::ShortCircuit(alternate) => Some(alternate),
        }
    }
}

/// Why a hook stopped the pass.
#[derive(Debug)]
pub enum Interrupt<R> {
    /// Abandon normal rendering and return this instead.
    Redirect(R),
    Failed(ComposeError),
}

impl<R> From<ComposeError> for Interrupt<R> {
    fn from(err: ComposeError) -> Self {
        Interrupt::Failed(err)
    }
}

/// Return type of element and controller hooks.
pub type Step<T, R> = std::result::Result<T, Interrupt<R>>;

/// Signal an early exit from inside a hook.
pub fn redirect<T, R>(alternate: R) -> Step<T, R> {
    Err(Interrupt::Redirect(alternate))
}

/// Split a hook result into the public shape.
pub fn settle<T, R>(step: Step<T, R>) -> Result<Outcome<T, R>, ComposeError> {
    match step {
        Ok(value) => Ok(Outcome::Continue(value)),
        Err(Interrupt::Redirect(alternate)) => Ok(Outcome::ShortCircuit(alternate)),
        Err(Interrupt::Failed(err)) => Err(err),
    }
}
