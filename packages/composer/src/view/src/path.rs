// View Path
//
// Logical `Bundle:Directory:file.html.format` identifiers.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::util::{identity_segments, parse_logical_name, snake_case, split_bundle, strip_suffix};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewPath {
    pub bundle: String,
    /// `/`-separated, may be empty
    pub directory: String,
    pub file: String,
}

impl ViewPath {
    pub fn new(
        bundle: impl Into<String>,
        directory: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            bundle: bundle.into(),
            directory: directory.into(),
            file: file.into(),
        }
    }

    /// Compute the view of a model from its declared identity.
    ///
    /// `Acme::ShopBundle::Model::Page::HomeModel` with format `twig` gives
    /// `AcmeShopBundle:Page:home.html.twig`. Segments up to the first one
    /// ending in `Bundle` form the bundle, a bare `Model` namespace segment is
    /// skipped and the last segment loses its suffix before snake-casing.
    pub fn from_identity(identity: &str, model_suffix: &str, format: &str) -> Self {
        let segments = identity_segments(identity);
        let (bundle, rest) = split_bundle(&segments);

        let (last, middle) = match rest.split_last() {
            Some((last, middle)) => (*last, middle),
            None => ("", rest),
        };
        let directory = middle
            .iter()
            .filter(|s| **s != model_suffix)
            .copied()
            .collect::<Vec<_>>()
            .join("/");
        let file = format!(
            "{}.html.{}",
            snake_case(strip_suffix(last, model_suffix)),
            format
        );

        Self {
            bundle,
            directory,
            file,
        }
    }

    /// Parse `Bundle:Directory:file`
    pub fn parse(logical_name: &str) -> Result<Self> {
        let logical = parse_logical_name(logical_name)?;
        Ok(Self::new(
            logical.bundle,
            logical.directory.replace('\\', "/"),
            logical.file,
        ))
    }

    /// Location relative to a view root: `Bundle/Directory/file`
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for part in [&self.bundle, &self.directory, &self.file] {
            if !part.is_empty() {
                path.push(part);
            }
        }
        path
    }
}

impl fmt::Display for ViewPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.bundle, self.directory, self.file)
    }
}
