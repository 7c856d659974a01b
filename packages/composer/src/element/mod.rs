//! Elements
//!
//! A model paired with the children it embeds. Models implement [`Element`];
//! the composition engine only ever sees them wrapped in an [`ElementNode`].

mod node;
mod registry;

pub use node::ElementNode;
pub use registry::Registry;

use crate::context::Context;
use crate::flow::Step;
use crate::naming::TypeIdentity;
use crate::options::ComposeOptions;
use crate::view::ViewPath;

/// A composable model. `R` is the alternate result an element may hand back
/// instead of letting the page render.
pub trait Element<R>: TypeIdentity {
    /// Scripts this element needs on the page
    fn javascripts(&self) -> Vec<String> {
        Vec::new()
    }

    /// Stylesheets this element needs on the page
    fn stylesheets(&self) -> Vec<String> {
        Vec::new()
    }

    /// Children every page gets. Only invoked on the root element.
    fn register_default_elements(&mut self, _registry: &mut Registry<'_, R>) -> Step<(), R> {
        Ok(())
    }

    /// Register children and client-side parameters. Runs right before the
    /// element is compiled, so children may defer building their subtree.
    fn register_elements(&mut self, registry: &mut Registry<'_, R>) -> Step<(), R>;

    /// Empty seed context this element's compiled output is written into.
    fn build_context(&mut self) -> Step<Box<dyn Context>, R>;

    /// The view this element renders with, derived from its identity unless
    /// overridden.
    fn view_path(&self, options: &ComposeOptions) -> ViewPath {
        ViewPath::from_identity(
            self.type_identity(),
            &options.naming.model_suffix,
            &options.template_format,
        )
    }
}
