use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{keys, Context};
use crate::assets::AssetSet;
use crate::naming::TypeIdentity;
use crate::view::ViewPath;

/// Standard context implementation.
///
/// Element-specific values go in through [`insert`](Self::insert) and are
/// flattened next to the standard keys, which take precedence on collision.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextNode {
    identity: String,
    assets: AssetSet,
    view_path: Option<ViewPath>,
    elements: IndexMap<String, Map<String, Value>>,
    data: Map<String, Value>,
}

impl ContextNode {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            assets: AssetSet::default(),
            view_path: None,
            elements: IndexMap::new(),
            data: Map::new(),
        }
    }

    /// Seed parameters a caller provides before compilation. The element's
    /// own parameters win over these.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assets.parameters.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Nothing has been written yet
    pub fn is_blank(&self) -> bool {
        self.assets.is_empty()
            && self.view_path.is_none()
            && self.elements.is_empty()
            && self.data.is_empty()
    }
}

impl TypeIdentity for ContextNode {
    fn type_identity(&self) -> &str {
        &self.identity
    }
}

impl Context for ContextNode {
    fn assets(&self) -> &AssetSet {
        &self.assets
    }

    fn assets_mut(&mut self) -> &mut AssetSet {
        &mut self.assets
    }

    fn view_path(&self) -> Option<&ViewPath> {
        self.view_path.as_ref()
    }

    fn set_view_path(&mut self, view: ViewPath) {
        self.view_path = Some(view);
    }

    fn elements(&self) -> &IndexMap<String, Map<String, Value>> {
        &self.elements
    }

    fn add_element(&mut self, name: &str, context: Map<String, Value>) {
        self.elements.insert(name.to_string(), context);
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.data.clone();
        map.insert(
            keys::JAVASCRIPTS.to_string(),
            Value::from_iter(self.assets.scripts.iter().cloned()),
        );
        map.insert(
            keys::STYLESHEETS.to_string(),
            Value::from_iter(self.assets.stylesheets.iter().cloned()),
        );
        map.insert(
            keys::JAVASCRIPT_PARAMETERS.to_string(),
            Value::Object(self.assets.parameters.clone().into_iter().collect()),
        );
        map.insert(
            keys::VIEW_PATH.to_string(),
            self.view_path
                .as_ref()
                .map_or(Value::Null, |view| Value::String(view.to_string())),
        );
        map.insert(
            keys::ELEMENTS.to_string(),
            Value::Object(
                self.elements
                    .iter()
                    .map(|(name, child)| (name.clone(), Value::Object(child.clone())))
                    .collect(),
            ),
        );
        map
    }
}
