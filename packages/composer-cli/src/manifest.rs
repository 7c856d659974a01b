// Page Manifest
//
// A page tree written down as JSON instead of as element types. Each entry
// names its model and context identities and the assets, parameters and data
// it contributes; `elements` are registered when the entry is compiled,
// `defaultElements` only on the page itself. `view` replaces the view derived
// from the identity with an explicit `Bundle:Directory:file` name.

use std::fs;
use std::path::Path;

use hmvc_composer::{
    redirect, ComposeOptions, Context, ContextNode, Element, Registry, Step, TypeIdentity,
    ViewPath,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestElement {
    pub identity: String,
    pub context: String,
    pub javascripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub parameters: Map<String, Value>,
    pub data: Map<String, Value>,
    pub elements: IndexMap<String, ManifestElement>,
    pub default_elements: IndexMap<String, ManifestElement>,
    /// Abandon the page with this target when the entry builds its context
    pub redirect: Option<String>,
    pub view: Option<String>,
    #[serde(skip)]
    resolved_view: Option<ViewPath>,
}

impl ManifestElement {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: ManifestElement = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Number of entries in the tree, this one included
    pub fn element_count(&self) -> usize {
        1 + self
            .default_elements
            .values()
            .chain(self.elements.values())
            .map(ManifestElement::element_count)
            .sum::<usize>()
    }
}

impl TypeIdentity for ManifestElement {
    fn type_identity(&self) -> &str {
        &self.identity
    }
}

impl Element<String> for ManifestElement {
    fn javascripts(&self) -> Vec<String> {
        self.javascripts.clone()
    }

    fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.clone()
    }

    fn register_default_elements(
        &mut self,
        registry: &mut Registry<'_, String>,
    ) -> Step<(), String> {
        for (name, element) in std::mem::take(&mut self.default_elements) {
            registry.register_element(&name, element);
        }
        Ok(())
    }

    fn register_elements(&mut self, registry: &mut Registry<'_, String>) -> Step<(), String> {
        for (key, value) in &self.parameters {
            registry.register_parameter(key, value.clone());
        }
        for (name, element) in std::mem::take(&mut self.elements) {
            registry.register_element(&name, element);
        }
        Ok(())
    }

    fn build_context(&mut self) -> Step<Box<dyn Context>, String> {
        if let Some(target) = self.redirect.take() {
            return redirect(target);
        }
        if let Some(view) = &self.view {
            self.resolved_view = Some(ViewPath::parse(view)?);
        }
        let mut context = ContextNode::new(self.context.clone());
        for (key, value) in &self.data {
            context.insert(key.clone(), value.clone());
        }
        Ok(Box::new(context))
    }

    fn view_path(&self, options: &ComposeOptions) -> ViewPath {
        match &self.resolved_view {
            Some(view) => view.clone(),
            None => ViewPath::from_identity(
                &self.identity,
                &options.naming.model_suffix,
                &options.template_format,
            ),
        }
    }
}
