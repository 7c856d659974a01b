#![deny(clippy::all)]

/**
 * HMVC Composer
 *
 * Builds a page from a tree of elements. Each element contributes scripts,
 * stylesheets, client-side parameters and a view; the composition engine
 * folds them into one deduplicated, namespaced context for the renderer.
 */

// Core modules
pub mod assets;
pub mod context;
pub mod element;
pub mod error;
pub mod flow;
pub mod naming;
pub mod options;
pub mod util;
pub mod view;

// Composition
pub mod controller;
pub mod engine;
pub mod page;

// Re-exports
pub use assets::{AssetSet, Parameters};
pub use context::{Context, ContextNode};
pub use controller::{
    CollaboratorLocator, Controller, ControllerElement, ControllerInvoker, ControllerRegistry,
    RequestScope,
};
pub use element::{Element, ElementNode, Registry};
pub use engine::CompositionEngine;
pub use error::{ComposeError, Result, TypeRole};
pub use flow::{redirect, Interrupt, Outcome, Step};
pub use naming::{NamingValidator, TypeIdentity};
pub use options::ComposeOptions;
pub use page::PageAssembler;
pub use view::{
    CachedViewResolver, FileViewResolver, InMemoryViewResolver, RenderedView, ViewPath,
    ViewResolver,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
