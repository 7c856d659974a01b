//! Page Assembler
//!
//! Drives one full page render: registration hooks on the root element, the
//! compile pass, then the external renderer. A redirect raised at any point
//! replaces the whole render with the alternate result it carries.

use crate::context::Context;
use crate::element::{Element, ElementNode};
use crate::error::{ComposeError, Result};
use crate::flow::{settle, Outcome, Step};
use crate::engine::CompositionEngine;
use crate::options::ComposeOptions;
use crate::view::ViewResolver;

pub struct PageAssembler<'a, V: ?Sized> {
    resolver: &'a V,
    options: ComposeOptions,
}

impl<'a, V> PageAssembler<'a, V>
where
    V: ViewResolver + ?Sized,
{
    pub fn new(resolver: &'a V) -> Self {
        Self::with_options(resolver, ComposeOptions::default())
    }

    pub fn with_options(resolver: &'a V, options: ComposeOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Build the page model from its input, then [`render`](Self::render) it.
    pub fn render_input<R, P, I>(&self, input: I) -> Result<Outcome<V::Output, R>>
    where
        R: 'static,
        P: Element<R> + From<I> + 'static,
    {
        self.render(P::from(input))
    }

    /// Compose `page` and hand the result to the renderer.
    pub fn render<R, P>(&self, page: P) -> Result<Outcome<V::Output, R>>
    where
        R: 'static,
        P: Element<R> + 'static,
    {
        let context = match self.compose(page)? {
            Outcome::Continue(context) => context,
            Outcome::ShortCircuit(alternate) => return Ok(Outcome::ShortCircuit(alternate)),
        };

        let view = context.view_path().cloned().ok_or_else(|| {
            ComposeError::render(context.type_identity(), "compiled context has no view")
        })?;
        self.resolver
            .render(&view, &context.to_map())
            .map(Outcome::Continue)
    }

    /// Run registration and the compile pass without rendering.
    pub fn compose<R, P>(&self, page: P) -> Result<Outcome<Box<dyn Context>, R>>
    where
        R: 'static,
        P: Element<R> + 'static,
    {
        let mut root = ElementNode::new(page);
        let identity = root.identity().to_string();
        let engine = CompositionEngine::new(self.resolver, &self.options);
        let step = match self.compose_root(&mut root) {
            Ok(mut context) => engine
                .compile_node(root, context.as_mut(), 0)
                .map(|()| context),
            Err(interrupt) => Err(interrupt),
        };
        let outcome = settle(step)?;

        if outcome.is_short_circuit() {
            tracing::info!(page = %identity, "Page rendering short-circuited");
        }
        Ok(outcome)
    }

    fn compose_root<R: 'static>(&self, root: &mut ElementNode<R>) -> Step<Box<dyn Context>, R> {
        root.register_default_elements()?;
        root.register_elements()?;
        root.build_context()
    }
}
