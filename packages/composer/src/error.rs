//! Composition Errors
//!
//! Every fatal condition of a compile pass. None of these are retried; they
//! abort the whole pass and no partial page is rendered.

use thiserror::Error;

/// Which half of a model/context pair failed the naming gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRole {
    Model,
    Context,
}

impl std::fmt::Display for TypeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRole::Model => f.write_str("model"),
            TypeRole::Context => f.write_str("context"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A model or context type identity does not carry the required suffix.
    #[error("{role} identities must end with `{expected_suffix}`, invalid {role}: {identity}")]
    StructuralNaming {
        role: TypeRole,
        identity: String,
        expected_suffix: String,
    },

    /// The view computed for a model does not exist in the resolver.
    #[error("non existent view for model {model}, expecting view at: {view}")]
    ViewResolution { model: String, view: String },

    /// A logical name could not be resolved by the collaborator locator.
    #[error("undefined element `{name}`, ensure it is registered with the locator")]
    MissingCollaborator { name: String },

    /// A logical template name did not have the `bundle:directory:file` shape.
    #[error("the template name `{name}` is not correct (it must contain two colons)")]
    MalformedLogicalName { name: String },

    /// The external renderer failed after composition succeeded.
    #[error("failed to render view {view}: {message}")]
    Render { view: String, message: String },
}

impl ComposeError {
    pub fn naming(role: TypeRole, identity: &str, expected_suffix: &str) -> Self {
        ComposeError::StructuralNaming {
            role,
            identity: identity.to_string(),
            expected_suffix: expected_suffix.to_string(),
        }
    }

    pub fn view_missing(model: &str, view: impl Into<String>) -> Self {
        ComposeError::ViewResolution {
            model: model.to_string(),
            view: view.into(),
        }
    }

    pub fn missing_collaborator(name: &str) -> Self {
        ComposeError::MissingCollaborator {
            name: name.to_string(),
        }
    }

    pub fn render(view: &str, message: impl Into<String>) -> Self {
        ComposeError::Render {
            view: view.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposeError>;
