use crate::options::{Mode, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Dot-files and dot-directories are part of the walk unless disabled.
    #[builder(default = "true")]
    pub hidden: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            hidden: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Extensions (without the dot) whose files are scanned.
    #[builder(default = "vec![\"js\".to_string()]")]
    pub allow_ext: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allow_ext: vec!["js".to_string()],
        }
    }
}

impl FilterConfig {
    /// An empty allow-list admits every file.
    #[must_use]
    pub fn allows(&self, path: &std::path::Path) -> bool {
        if self.allow_ext.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.allow_ext.iter().any(|e| e == ext))
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,

    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub top_n: Option<usize>,
    #[builder(default)]
    pub include_empty: bool,

    #[builder(default)]
    pub strict: bool,
}

impl Config {
    /// Report destination, falling back to the mode's fixed file name.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.mode.default_output())
    }
}
