//! Composer options

use serde::Deserialize;

use crate::naming::NamingValidator;

/// Settings shared by the engine and the page assembler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    /// Extension of view templates, the `twig` in `home.html.twig`
    pub template_format: String,
    pub naming: NamingValidator,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            template_format: "twig".to_string(),
            naming: NamingValidator::default(),
        }
    }
}

impl ComposeOptions {
    pub fn with_template_format(mut self, format: impl Into<String>) -> Self {
        self.template_format = format.into();
        self
    }

    pub fn with_naming(mut self, naming: NamingValidator) -> Self {
        self.naming = naming;
        self
    }
}
