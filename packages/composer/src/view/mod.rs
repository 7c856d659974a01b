//! Views
//!
//! Logical view identifiers and the resolver contract the engine consumes.

pub mod src {
    pub mod cache;
    pub mod path;
    pub mod resolver;
}

pub use src::cache::*;
pub use src::path::*;
pub use src::resolver::*;
