use indexmap::IndexMap;
use serde_json::Value;

use super::{Element, ElementNode};
use crate::assets::Parameters;

/// Write access an element's hooks get to its own node.
pub struct Registry<'a, R> {
    pub(crate) owner: &'a str,
    pub(crate) children: &'a mut IndexMap<String, ElementNode<R>>,
    pub(crate) parameters: &'a mut Parameters,
}

impl<'a, R: 'static> Registry<'a, R> {
    /// Embed `element` under `name`. A name that is already taken keeps its
    /// first registration.
    pub fn register_element<E>(&mut self, name: &str, element: E) -> &mut Self
    where
        E: Element<R> + 'static,
    {
        self.register_node(name, ElementNode::new(element))
    }

    pub fn register_node(&mut self, name: &str, node: ElementNode<R>) -> &mut Self {
        if self.children.contains_key(name) {
            tracing::trace!(
                owner = self.owner,
                name,
                ignored = node.identity(),
                "Ignoring duplicate element registration"
            );
        } else {
            self.children.insert(name.to_string(), node);
        }
        self
    }

    /// Set a client-side parameter for this element. Later calls for the same
    /// key replace earlier ones.
    pub fn register_parameter(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
