//! Configuration for the diff engine.
//!
//! Settings come from built-in defaults overlaid by `LIST_DIFF__*`
//! environment variables.
//!
//! # Example
//!
//! ```
//! use list_diff::config::DiffSettings;
//!
//! let settings = DiffSettings::new().expect("Failed to load configuration");
//! ```

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// How the edit tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStrategy {
    /// Recurse into each half of the edit graph.
    Recursive,
    /// Use an explicit work stack.
    Iterative,
    /// Recurse for small inputs, switch to the work stack above the threshold.
    #[default]
    Auto,
}

/// Settings for [`crate::diff::MyersListDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DiffSettings {
    /// Tree construction strategy (default: auto)
    #[serde(default)]
    pub strategy: TreeStrategy,

    /// Combined input length above which `auto` uses the work stack
    /// (default: 4096)
    #[serde(default = "default_iterative_threshold")]
    pub iterative_threshold: usize,
}

impl DiffSettings {
    /// Loads settings from defaults and `LIST_DIFF__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its setting.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(environment())
    }

    /// Loads settings from defaults overlaid by the given environment source.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("strategy", "auto")?
            .set_default("iterative_threshold", default_iterative_threshold() as i64)?
            .add_source(source)
            .build()?;

        s.try_deserialize()
    }

    /// Returns true if inputs with `total_len` combined elements should be
    /// built with the work stack.
    #[must_use]
    pub const fn uses_work_stack(&self, total_len: usize) -> bool {
        match self.strategy {
            TreeStrategy::Recursive => false,
            TreeStrategy::Iterative => true,
            TreeStrategy::Auto => total_len > self.iterative_threshold,
        }
    }
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            strategy: TreeStrategy::default(),
            iterative_threshold: default_iterative_threshold(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("LIST_DIFF")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

const fn default_iterative_threshold() -> usize {
    4096
}
