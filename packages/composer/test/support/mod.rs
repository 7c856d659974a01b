//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hmvc_composer::{
    redirect, ComposeOptions, Context, ContextNode, Element, InMemoryViewResolver, Registry,
    RenderedView, Result, Step, TypeIdentity, ViewPath, ViewResolver,
};
use serde_json::{Map, Value};

/// Records hook calls as `register:<identity>` / `build:<identity>`.
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Configurable element whose redirect result is a location string.
#[derive(Clone)]
pub struct Widget {
    pub identity: String,
    pub context: String,
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub parameters: Vec<(String, Value)>,
    pub data: Vec<(String, Value)>,
    pub children: Vec<(String, Widget)>,
    pub defaults: Vec<(String, Widget)>,
    pub redirect: Option<String>,
    pub log: Option<Log>,
}

impl Widget {
    pub fn new(identity: &str, context: &str) -> Self {
        Self {
            identity: identity.to_string(),
            context: context.to_string(),
            scripts: Vec::new(),
            stylesheets: Vec::new(),
            parameters: Vec::new(),
            data: Vec::new(),
            children: Vec::new(),
            defaults: Vec::new(),
            redirect: None,
            log: None,
        }
    }

    /// `AppBundle::Model::Element::<name>Model`
    pub fn element(name: &str) -> Self {
        Self::new(
            &format!("AppBundle::Model::Element::{}Model", name),
            &format!("AppBundle::Context::Element::{}Context", name),
        )
    }

    /// `AppBundle::Model::Page::<name>Model`
    pub fn page(name: &str) -> Self {
        Self::new(
            &format!("AppBundle::Model::Page::{}Model", name),
            &format!("AppBundle::Context::Page::{}Context", name),
        )
    }

    pub fn script(mut self, url: &str) -> Self {
        self.scripts.push(url.to_string());
        self
    }

    pub fn stylesheet(mut self, url: &str) -> Self {
        self.stylesheets.push(url.to_string());
        self
    }

    pub fn parameter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters.push((key.to_string(), value.into()));
        self
    }

    pub fn data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.push((key.to_string(), value.into()));
        self
    }

    pub fn child(mut self, name: &str, child: Widget) -> Self {
        self.children.push((name.to_string(), child));
        self
    }

    pub fn default_child(mut self, name: &str, child: Widget) -> Self {
        self.defaults.push((name.to_string(), child));
        self
    }

    pub fn redirects_to(mut self, location: &str) -> Self {
        self.redirect = Some(location.to_string());
        self
    }

    pub fn logged(mut self, log: &Log) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// Logical view name computed with default options
    pub fn view(&self) -> String {
        let options = ComposeOptions::default();
        ViewPath::from_identity(
            &self.identity,
            &options.naming.model_suffix,
            &options.template_format,
        )
        .to_string()
    }

    /// Views of this widget and its whole subtree
    pub fn views(&self) -> Vec<String> {
        let mut views = vec![self.view()];
        for (_, child) in self.children.iter().chain(self.defaults.iter()) {
            views.extend(child.views());
        }
        views
    }

    fn record(&self, event: &str) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("{}:{}", event, self.identity));
        }
    }
}

impl TypeIdentity for Widget {
    fn type_identity(&self) -> &str {
        &self.identity
    }
}

impl Element<String> for Widget {
    fn javascripts(&self) -> Vec<String> {
        self.scripts.clone()
    }

    fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.clone()
    }

    fn register_default_elements(&mut self, registry: &mut Registry<'_, String>) -> Step<(), String> {
        for (name, child) in self.defaults.drain(..) {
            registry.register_element(&name, child);
        }
        Ok(())
    }

    fn register_elements(&mut self, registry: &mut Registry<'_, String>) -> Step<(), String> {
        self.record("register");
        for (key, value) in &self.parameters {
            registry.register_parameter(key, value.clone());
        }
        for (name, child) in self.children.drain(..) {
            registry.register_element(&name, child);
        }
        Ok(())
    }

    fn build_context(&mut self) -> Step<Box<dyn Context>, String> {
        self.record("build");
        if let Some(location) = &self.redirect {
            return redirect(location.clone());
        }
        let mut context = ContextNode::new(self.context.clone());
        for (key, value) in &self.data {
            context.insert(key.clone(), value.clone());
        }
        Ok(Box::new(context))
    }
}

pub fn resolver_for(root: &Widget) -> InMemoryViewResolver {
    let mut resolver = InMemoryViewResolver::new();
    for view in root.views() {
        resolver.add(&view, "");
    }
    resolver
}

/// Counts render calls.
pub struct CountingResolver {
    pub inner: InMemoryViewResolver,
    pub renders: Cell<usize>,
}

impl CountingResolver {
    pub fn new(inner: InMemoryViewResolver) -> Self {
        Self {
            inner,
            renders: Cell::new(0),
        }
    }
}

impl ViewResolver for CountingResolver {
    type Output = RenderedView;

    fn exists(&self, view: &ViewPath) -> bool {
        self.inner.exists(view)
    }

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<RenderedView> {
        self.renders.set(self.renders.get() + 1);
        self.inner.render(view, context)
    }
}

/// Every string in `value` under a `javascripts` or `stylesheets` key, at any depth.
pub fn collect_assets(value: &Value, found: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (key, inner) in map {
            if key == "javascripts" || key == "stylesheets" {
                if let Value::Array(items) = inner {
                    found.extend(items.iter().filter_map(|v| v.as_str().map(str::to_string)));
                }
            } else {
                collect_assets(inner, found);
            }
        }
    }
}
