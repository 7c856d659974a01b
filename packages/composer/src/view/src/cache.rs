// Cached View Resolver
//
// Remembers existence answers for the lifetime of the wrapper.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{Map, Value};

use super::path::ViewPath;
use super::resolver::ViewResolver;
use crate::error::Result;

pub struct CachedViewResolver<V> {
    inner: V,
    known: RefCell<HashMap<ViewPath, bool>>,
}

impl<V: ViewResolver> CachedViewResolver<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            known: RefCell::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.known.borrow().len()
    }
}

impl<V: ViewResolver> ViewResolver for CachedViewResolver<V> {
    type Output = V::Output;

    fn exists(&self, view: &ViewPath) -> bool {
        if let Some(known) = self.known.borrow().get(view) {
            return *known;
        }
        let exists = self.inner.exists(view);
        self.known.borrow_mut().insert(view.clone(), exists);
        exists
    }

    fn render(&self, view: &ViewPath, context: &Map<String, Value>) -> Result<Self::Output> {
        self.inner.render(view, context)
    }
}
