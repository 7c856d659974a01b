//! Controller Elements
//!
//! Children that have to be invoked rather than simply compiled. They are
//! resolved by logical name from a [`CollaboratorLocator`], receive the
//! request scope of their parent, and contribute their context under a
//! namespace derived from their bundle and action.

pub mod src {
    pub mod controller;
    pub mod element;
    pub mod invoker;
    pub mod locator;
}

pub use src::controller::*;
pub use src::element::*;
pub use src::invoker::*;
pub use src::locator::*;
