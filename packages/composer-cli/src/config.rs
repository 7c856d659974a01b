use hmvc_composer::{ComposeOptions, NamingValidator};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "hmvc.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposerConfig {
    /// Directory holding `<Bundle>/<Directory>/<file>` templates
    pub view_root: PathBuf,
    pub template_format: String,
    /// Remember view existence answers for the duration of one page
    pub cache_views: bool,
    pub naming: NamingValidator,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        let options = ComposeOptions::default();
        Self {
            view_root: PathBuf::from("views"),
            template_format: options.template_format,
            cache_views: false,
            naming: options.naming,
        }
    }
}

impl ComposerConfig {
    /// Load a config file. A relative `viewRoot` is taken relative to the
    /// directory the file lives in.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: ComposerConfig = serde_json::from_str(&content)?;
        if config.view_root.is_relative() {
            if let Some(dir) = path.parent() {
                config.view_root = dir.join(&config.view_root);
            }
        }
        Ok(config)
    }

    /// Use `explicit` if given, otherwise `hmvc.json` in `cwd` if present,
    /// otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!(cwd = %cwd.display(), "No config file found, using defaults");
            Ok(Self {
                view_root: cwd.join("views"),
                ..Self::default()
            })
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions::default()
            .with_template_format(self.template_format.clone())
            .with_naming(self.naming.clone())
    }
}
