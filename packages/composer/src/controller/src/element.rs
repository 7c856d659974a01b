// Controller Element
//
// Puts a controller into an element tree. The controller runs when the
// element's context is built; its view becomes the element's view.

use std::rc::Rc;

use super::controller::{Controller, RequestScope};
use super::invoker::ControllerInvoker;
use super::locator::CollaboratorLocator;
use crate::context::{Context, ContextNode};
use crate::element::{Element, Registry};
use crate::error::ComposeError;
use crate::flow::Step;
use crate::naming::TypeIdentity;
use crate::options::ComposeOptions;
use crate::view::ViewPath;

pub const CONTROLLER_MODEL: &str = "hmvc::controller::ControllerModel";
pub const CONTROLLER_CONTEXT: &str = "hmvc::controller::ControllerContext";

pub struct ControllerElement<R> {
    name: String,
    locator: Rc<dyn CollaboratorLocator<R>>,
    scope: RequestScope,
    /// The controller once it has run
    invoked: Option<Box<dyn Controller<R>>>,
}

impl<R> ControllerElement<R> {
    pub fn new(name: &str, locator: Rc<dyn CollaboratorLocator<R>>, scope: RequestScope) -> Self {
        Self {
            name: name.to_string(),
            locator,
            scope,
            invoked: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R> TypeIdentity for ControllerElement<R> {
    fn type_identity(&self) -> &str {
        CONTROLLER_MODEL
    }
}

impl<R> Element<R> for ControllerElement<R> {
    fn register_elements(&mut self, _registry: &mut Registry<'_, R>) -> Step<(), R> {
        if self.locator.has(&self.name) {
            Ok(())
        } else {
            Err(ComposeError::missing_collaborator(&self.name).into())
        }
    }

    fn build_context(&mut self) -> Step<Box<dyn Context>, R> {
        let mut controller = self
            .locator
            .resolve(&self.name)
            .ok_or_else(|| ComposeError::missing_collaborator(&self.name))?;
        controller.attach_scope(&self.scope);

        let invoker = ControllerInvoker::new(self.locator.as_ref());
        let output = invoker.execute(controller.as_mut(), &self.scope)?;
        self.invoked = Some(controller);

        let mut context = ContextNode::new(CONTROLLER_CONTEXT);
        for (key, value) in output {
            context.insert(key, value);
        }
        Ok(Box::new(context))
    }

    fn view_path(&self, options: &ComposeOptions) -> ViewPath {
        match &self.invoked {
            Some(controller) => controller.view_path(options),
            None => ViewPath::from_identity(
                CONTROLLER_MODEL,
                &options.naming.model_suffix,
                &options.template_format,
            ),
        }
    }
}
