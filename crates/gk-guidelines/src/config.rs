// config.rs — Authorization configuration.
//
// Two authorization tiers, loaded from gatekeeper.toml:
//
// - `authorized_authors`: may submit any registration.
// - `generated_authors`: may submit only generated-pattern registrations
//   (machine-produced wrapper packages), for which the naming guidelines
//   are relaxed.
//
// The generated-package naming convention is a glob pattern so deployments
// can adjust it without a code change.

use std::path::Path;

use glob::Pattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authorization configuration for the evaluation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authors allowed to submit any registration.
    #[serde(default)]
    pub authorized_authors: Vec<String>,

    /// Authors allowed to submit only generated-pattern registrations.
    #[serde(default)]
    pub generated_authors: Vec<String>,

    /// Glob pattern identifying generated (wrapper) package names.
    #[serde(default = "default_generated_pattern")]
    pub generated_name_pattern: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authorized_authors: Vec::new(),
            generated_authors: Vec::new(),
            generated_name_pattern: default_generated_pattern(),
        }
    }
}

fn default_generated_pattern() -> String {
    "*_bin".to_string()
}

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AuthConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load config, returning defaults if the file doesn't exist or
    /// fails to parse. Defaults authorize nobody.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Whether the author may submit this kind of registration.
    ///
    /// This is the precondition check, and it is kind-aware: the narrow
    /// generated tier only authorizes generated-pattern submissions. A
    /// narrow-tier author submitting an ordinary package is rejected before
    /// any guideline runs.
    pub fn is_authorized(&self, author: &str, is_generated: bool) -> bool {
        self.authorized_authors.iter().any(|a| a == author)
            || (is_generated && self.generated_authors.iter().any(|a| a == author))
    }

    /// Whether the author is in the narrow generated-package tier.
    pub fn is_generated_author(&self, author: &str) -> bool {
        self.generated_authors.iter().any(|a| a == author)
    }

    /// Whether a package name matches the generated-package naming pattern.
    ///
    /// An invalid pattern never matches (fail-closed, not fail-open).
    pub fn is_generated_name(&self, name: &str) -> bool {
        match Pattern::new(&self.generated_name_pattern) {
            Ok(p) => p.matches(name),
            Err(_) => false,
        }
    }
}
