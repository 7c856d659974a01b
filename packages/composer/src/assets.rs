//! Asset Sets
//!
//! Scripts, stylesheets and client-side parameters contributed by one element.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered, key-unique parameter bag handed to client-side scripts.
pub type Parameters = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSet {
    #[serde(rename = "javascripts")]
    pub scripts: IndexSet<String>,
    pub stylesheets: IndexSet<String>,
    #[serde(rename = "javascriptParameters")]
    pub parameters: Parameters,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scripts<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts.extend(scripts.into_iter().map(Into::into));
        self
    }

    pub fn with_stylesheets<I, S>(mut self, stylesheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stylesheets.extend(stylesheets.into_iter().map(Into::into));
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.stylesheets.is_empty() && self.parameters.is_empty()
    }

    /// Replace the asset lists with the ones a model declares.
    pub fn set_declared(&mut self, scripts: IndexSet<String>, stylesheets: IndexSet<String>) {
        self.scripts = scripts;
        self.stylesheets = stylesheets;
    }

    /// Lay `own` over the parameters already present. Keys in `own` win.
    pub fn overlay_parameters(&mut self, own: &Parameters) {
        for (key, value) in own {
            self.parameters.insert(key.clone(), value.clone());
        }
    }

    /// Fold a compiled child's assets into this set and leave the child empty.
    ///
    /// Scripts and stylesheets become `child ∪ self` with duplicates dropped.
    /// Parameters already present here are never overwritten by the child.
    pub fn absorb(&mut self, child: &mut AssetSet) {
        self.scripts = union(std::mem::take(&mut child.scripts), &self.scripts);
        self.stylesheets = union(std::mem::take(&mut child.stylesheets), &self.stylesheets);

        for (key, value) in std::mem::take(&mut child.parameters) {
            self.parameters.entry(key).or_insert(value);
        }
    }
}

fn union(mut first: IndexSet<String>, second: &IndexSet<String>) -> IndexSet<String> {
    first.extend(second.iter().cloned());
    first
}
