//! Naming Validator
//!
//! The single policy point for how model and context types must be named.
//! Identities are declared by each type through [`TypeIdentity`]; nothing is
//! derived from runtime type names.

use serde::Deserialize;

use crate::error::{ComposeError, Result, TypeRole};

/// Statically declared identity of an element or context type, e.g.
/// `AcmeShopBundle::Model::Page::HomeModel`.
pub trait TypeIdentity {
    fn type_identity(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingValidator {
    pub model_suffix: String,
    pub context_suffix: String,
}

impl Default for NamingValidator {
    fn default() -> Self {
        Self {
            model_suffix: "Model".to_string(),
            context_suffix: "Context".to_string(),
        }
    }
}

impl NamingValidator {
    pub fn new(model_suffix: impl Into<String>, context_suffix: impl Into<String>) -> Self {
        Self {
            model_suffix: model_suffix.into(),
            context_suffix: context_suffix.into(),
        }
    }

    /// Check a model/context pair. The model is checked first.
    pub fn validate(&self, model_identity: &str, context_identity: &str) -> Result<()> {
        if !model_identity.ends_with(&self.model_suffix) {
            return Err(ComposeError::naming(
                TypeRole::Model,
                model_identity,
                &self.model_suffix,
            ));
        }
        if !context_identity.ends_with(&self.context_suffix) {
            return Err(ComposeError::naming(
                TypeRole::Context,
                context_identity,
                &self.context_suffix,
            ));
        }
        Ok(())
    }
}
