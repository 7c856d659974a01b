// Controller Invoker
//
// Executes a controller and the controllers it embeds.

use serde_json::{Map, Value};

use super::controller::{Controller, RequestScope};
use super::locator::CollaboratorLocator;
use crate::error::ComposeError;
use crate::flow::Step;

/// Key under which every controller namespace is collected.
pub const NAMESPACE_ROOT: &str = "hmvc";

pub struct ControllerInvoker<'a, R> {
    locator: &'a dyn CollaboratorLocator<R>,
}

impl<'a, R> ControllerInvoker<'a, R> {
    pub fn new(locator: &'a dyn CollaboratorLocator<R>) -> Self {
        Self { locator }
    }

    /// Resolve `name`, hand it `scope` and execute it.
    pub fn invoke(&self, name: &str, scope: &RequestScope) -> Step<Map<String, Value>, R> {
        let mut controller = self.resolve(name)?;
        controller.attach_scope(scope);
        self.execute(controller.as_mut(), scope)
    }

    /// Execute `controller`.
    ///
    /// Its own context lands under `hmvc.<namespace>`. Every embedded
    /// controller is resolved before any of them runs, so a missing one fails
    /// the call without side effects. Embedded results are merged in
    /// depth-first; values already present are kept.
    pub fn execute(
        &self,
        controller: &mut dyn Controller<R>,
        scope: &RequestScope,
    ) -> Step<Map<String, Value>, R> {
        let mut embedded = controller
            .elements()
            .iter()
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;

        let own = controller.generate_context(scope)?;
        let namespace = controller.namespace()?;
        tracing::debug!(
            controller = controller.type_identity(),
            namespace = %namespace,
            embedded = embedded.len(),
            "Executing controller"
        );

        let mut namespaces = Map::new();
        namespaces.insert(namespace, Value::Object(own));
        let mut context = Map::new();
        context.insert(NAMESPACE_ROOT.to_string(), Value::Object(namespaces));

        for child in embedded.iter_mut() {
            child.attach_scope(scope);
            let child_context = self.execute(child.as_mut(), scope)?;
            merge_missing(&mut context, child_context);
        }

        Ok(context)
    }

    fn resolve(&self, name: &str) -> Result<Box<dyn Controller<R>>, ComposeError> {
        self.locator
            .resolve(name)
            .ok_or_else(|| ComposeError::missing_collaborator(name))
    }
}

/// Recursive merge where `target` wins every conflict that is not between
/// two objects.
pub fn merge_missing(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(Value::Object(existing)) => {
                if let Value::Object(incoming) = value {
                    merge_missing(existing, incoming);
                }
            }
            Some(_) => {}
            None => {
                target.insert(key, value);
            }
        }
    }
}
