// Controller
//
// The invocation contract of a controller-style child.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::flow::Step;
use crate::naming::TypeIdentity;
use crate::options::ComposeOptions;
use crate::util::{
    identity_segments, normalize_logical_name, short_name, split_bundle, strip_suffix,
};
use crate::view::ViewPath;

/// Request-scoped values a parent hands to every controller it invokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestScope {
    attributes: Map<String, Value>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

pub trait Controller<R>: TypeIdentity {
    /// `cart` for `Acme::ShopBundle::Controller::CartController`
    fn action_identity(&self) -> String {
        strip_suffix(short_name(self.type_identity()), "Controller").to_lowercase()
    }

    /// Logical names of the controllers this one embeds
    fn elements(&self) -> Vec<String> {
        Vec::new()
    }

    /// Receive the parent's request scope before invocation.
    fn attach_scope(&mut self, _scope: &RequestScope) {}

    fn generate_context(&mut self, scope: &RequestScope) -> Step<Map<String, Value>, R>;

    /// `AcmeShopBundle:Cart:cart.html.twig`
    fn view_path(&self, options: &ComposeOptions) -> ViewPath {
        controller_view(
            self.type_identity(),
            &self.action_identity(),
            &options.template_format,
        )
    }

    /// Key this controller's context is stored under, e.g. `acmeshopbundle_cart`
    fn namespace(&self) -> Result<String> {
        controller_namespace(self.type_identity(), &self.action_identity())
    }
}

/// View guessed for a controller action: the bundle of the identity, the
/// namespaces below `Controller` plus the controller name without its suffix
/// as directory, the action as file.
///
/// `Acme::ShopBundle::Controller::Admin::UserController` with action `list`
/// gives `AcmeShopBundle:Admin/User:list.html.twig`.
pub fn controller_view(identity: &str, action: &str, format: &str) -> ViewPath {
    let segments = identity_segments(identity);
    let (bundle, rest) = split_bundle(&segments);

    let mut directory: Vec<&str> = match rest.split_last() {
        Some((_, middle)) => middle.iter().copied().filter(|s| *s != "Controller").collect(),
        None => Vec::new(),
    };
    directory.push(strip_suffix(short_name(identity), "Controller"));

    ViewPath::new(
        bundle,
        directory.join("/"),
        format!("{}.html.{}", action, format),
    )
}

/// Namespace of a controller: its guessed view's bundle and directory,
/// normalized. Fails when the identity cannot form a logical view name.
pub fn controller_namespace(identity: &str, action: &str) -> Result<String> {
    normalize_logical_name(&controller_view(identity, action, "twig").to_string())
}
