use indexmap::IndexMap;

use super::{Element, Registry};
use crate::assets::Parameters;
use crate::context::Context;
use crate::flow::Step;

/// An element together with its registered children and parameters.
///
/// A node owns its children outright, so it can never hold one of its own
/// ancestors. Compiling consumes the node.
pub struct ElementNode<R> {
    pub(crate) identity: String,
    pub(crate) model: Box<dyn Element<R>>,
    pub(crate) children: IndexMap<String, ElementNode<R>>,
    pub(crate) parameters: Parameters,
}

impl<R: 'static> ElementNode<R> {
    pub fn new<E>(model: E) -> Self
    where
        E: Element<R> + 'static,
    {
        Self {
            identity: model.type_identity().to_string(),
            model: Box::new(model),
            children: IndexMap::new(),
            parameters: Parameters::new(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn model(&self) -> &dyn Element<R> {
        self.model.as_ref()
    }

    /// Registered child names in registration order
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn child(&self, name: &str) -> Option<&ElementNode<R>> {
        self.children.get(name)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn register_default_elements(&mut self) -> Step<(), R> {
        let mut registry = Registry {
            owner: &self.identity,
            children: &mut self.children,
            parameters: &mut self.parameters,
        };
        self.model.register_default_elements(&mut registry)
    }

    pub fn register_elements(&mut self) -> Step<(), R> {
        let mut registry = Registry {
            owner: &self.identity,
            children: &mut self.children,
            parameters: &mut self.parameters,
        };
        self.model.register_elements(&mut registry)
    }

    pub fn build_context(&mut self) -> Step<Box<dyn Context>, R> {
        self.model.build_context()
    }
}

impl<R> std::fmt::Debug for ElementNode<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementNode")
            .field("identity", &self.identity)
            .field("children", &self.children)
            .field("parameters", &self.parameters)
            .finish()
    }
}
