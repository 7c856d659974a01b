//! Element Contexts
//!
//! The compiled, mergeable output of one element.

mod node;

pub use node::ContextNode;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::assets::AssetSet;
use crate::naming::TypeIdentity;
use crate::view::ViewPath;

/// Keys every flattened context carries.
pub mod keys {
    pub const JAVASCRIPTS: &str = "javascripts";
    pub const STYLESHEETS: &str = "stylesheets";
    pub const JAVASCRIPT_PARAMETERS: &str = "javascriptParameters";
    pub const VIEW_PATH: &str = "viewPath";
    pub const ELEMENTS: &str = "elements";
}

/// Capability shared by every context type the engine can populate.
pub trait Context: TypeIdentity {
    fn assets(&self) -> &AssetSet;

    fn assets_mut(&mut self) -> &mut AssetSet;

    fn view_path(&self) -> Option<&ViewPath>;

    fn set_view_path(&mut self, view: ViewPath);

    /// Flattened child contexts by registered name
    fn elements(&self) -> &IndexMap<String, Map<String, Value>>;

    fn add_element(&mut self, name: &str, context: Map<String, Value>);

    /// Flatten into the mapping handed to the renderer.
    fn to_map(&self) -> Map<String, Value>;
}
