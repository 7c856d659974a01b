//! Composition Engine
//!
//! Depth-first compile pass over an element tree. Every node is validated,
//! given its assets, parameters and view, and then absorbs the compiled output
//! of each child in registration order:
//!
//! - scripts and stylesheets surface once, at the node that absorbs them;
//! - parameters an ancestor already holds are never overwritten, so among
//!   siblings the first one to set a key wins;
//! - the stripped child context is flattened under its registered name.
//!
//! A redirect raised anywhere stops the pass immediately; children that were
//! not reached yet are never compiled.

use crate::context::Context;
use crate::element::ElementNode;
use crate::error::{ComposeError, Result};
use crate::flow::{settle, Outcome, Step};
use crate::options::ComposeOptions;
use crate::view::ViewResolver;

pub struct CompositionEngine<'a, V: ?Sized> {
    resolver: &'a V,
    options: &'a ComposeOptions,
}

impl<'a, V> CompositionEngine<'a, V>
where
    V: ViewResolver + ?Sized,
{
    pub fn new(resolver: &'a V, options: &'a ComposeOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &ComposeOptions {
        self.options
    }

    /// Compile `node` into `context`.
    ///
    /// On error `context` may hold the writes of nodes compiled before the
    /// failure; it must be discarded. A naming failure on `node` itself leaves
    /// `context` untouched.
    pub fn compile<R: 'static>(
        &self,
        node: ElementNode<R>,
        context: &mut dyn Context,
    ) -> Result<Outcome<(), R>> {
        settle(self.compile_node(node, context, 0))
    }

    pub(crate) fn compile_node<R: 'static>(
        &self,
        node: ElementNode<R>,
        context: &mut dyn Context,
        depth: usize,
    ) -> Step<(), R> {
        let ElementNode {
            identity,
            model,
            children,
            parameters,
        } = node;

        self.options
            .naming
            .validate(&identity, context.type_identity())?;

        let view = model.view_path(self.options);
        if !self.resolver.exists(&view) {
            return Err(ComposeError::view_missing(&identity, view.to_string()).into());
        }

        tracing::debug!(
            element = %identity,
            view = %view,
            depth,
            children = children.len(),
            "Compiling element"
        );

        let assets = context.assets_mut();
        assets.set_declared(
            model.javascripts().into_iter().collect(),
            model.stylesheets().into_iter().collect(),
        );
        assets.overlay_parameters(&parameters);
        context.set_view_path(view);

        for (name, mut child) in children {
            child.register_elements()?;
            let mut child_context = child.build_context()?;
            self.compile_node(child, child_context.as_mut(), depth + 1)?;

            context.assets_mut().absorb(child_context.assets_mut());
            context.add_element(&name, child_context.to_map());
        }

        Ok(())
    }
}
