// View Resolver
//
// Existence checks and rendering of logical views. Rendering here never
// interprets template source; it pairs the source with the flattened context
// so an external template engine can take over.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use super::path::ViewPath;
use crate::error::{ComposeError, Result};

/// View resolver contract. The engine only ever calls [`exists`](Self::exists).
pub trait ViewResolver {
    type Output;

    fn exists(&self, view: &ViewPath) -> bool;

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<Self::Output>;
}

impl<V: ViewResolver + ?Sized> ViewResolver for &V {
    type Output = V::Output;

    fn exists(&self, view: &ViewPath) -> bool {
        (**self).exists(view)
    }

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<Self::Output> {
        (**self).render(view, context)
    }
}

/// A view paired with the context it should be rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub view: String,
    pub template: String,
    pub context: Map<String, Value>,
}

/// In-memory view resolver.
#[derive(Debug, Default)]
pub struct InMemoryViewResolver {
    templates: HashMap<String, String>,
}

impl InMemoryViewResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register template source under a logical name such as
    /// `AppBundle:Page:home.html.twig`.
    pub fn add(&mut self, view: &str, source: &str) {
        self.templates.insert(view.to_string(), source.to_string());
    }

    pub fn with(mut self, view: &str, source: &str) -> Self {
        self.add(view, source);
        self
    }
}

impl ViewResolver for InMemoryViewResolver {
    type Output = RenderedView;

    fn exists(&self, view: &ViewPath) -> bool {
        self.templates.contains_key(&view.to_string())
    }

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<RenderedView> {
        let name = view.to_string();
        let template = self
            .templates
            .get(&name)
            .cloned()
            .ok_or_else(|| ComposeError::render(&name, "view not registered"))?;
        Ok(RenderedView {
            view: name,
            template,
            context: context.clone(),
        })
    }
}

/// File-based view resolver: `<root>/<Bundle>/<Directory>/<file>`.
#[derive(Debug, Clone)]
pub struct FileViewResolver {
    root_dir: PathBuf,
}

impl FileViewResolver {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn path_of(&self, view: &ViewPath) -> PathBuf {
        self.root_dir.join(view.relative_path())
    }
}

impl ViewResolver for FileViewResolver {
    type Output = RenderedView;

    fn exists(&self, view: &ViewPath) -> bool {
        self.path_of(view).is_file()
    }

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<RenderedView> {
        let name = view.to_string();
        let template = std::fs::read_to_string(self.path_of(view))
            .map_err(|e| ComposeError::render(&name, e.to_string()))?;
        Ok(RenderedView {
            view: name,
            template,
            context: context.clone(),
        })
    }
}
