// Collaborator Locator
//
// Resolves controllers by logical name.

use indexmap::IndexMap;

use super::controller::Controller;

/// Resolution must be repeatable without side effects: every call hands out a
/// fresh instance.
pub trait CollaboratorLocator<R> {
    fn resolve(&self, name: &str) -> Option<Box<dyn Controller<R>>>;

    fn has(&self, name: &str) -> bool;
}

type Factory<R> = Box<dyn Fn() -> Box<dyn Controller<R>>>;

/// Locator backed by registered factories.
pub struct ControllerRegistry<R> {
    factories: IndexMap<String, Factory<R>>,
}

impl<R> Default for ControllerRegistry<R> {
    fn default() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }
}

impl<R: 'static> ControllerRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        C: Controller<R> + 'static,
        F: Fn() -> C + 'static,
    {
        self.factories.insert(
            name.to_string(),
            Box::new(move || Box::new(factory()) as Box<dyn Controller<R>>),
        );
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl<R> CollaboratorLocator<R> for ControllerRegistry<R> {
    fn resolve(&self, name: &str) -> Option<Box<dyn Controller<R>>> {
        self.factories.get(name).map(|factory| factory())
    }

    fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}
