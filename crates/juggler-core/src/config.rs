use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use juggler_util::errors::{JugglerError, JugglerResult};

use crate::listing::DEFAULT_FLAVOR;
use crate::version::VersionSpec;

/// User configuration loaded from `~/.juggler/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Default version spec per package name. Values are kept untyped so a
    /// malformed pin is reported when it is used, not when the file loads.
    #[serde(default)]
    pub pins: BTreeMap<String, toml::Value>,
}

/// Repository locations from `[repository]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub local: Option<String>,
    #[serde(default)]
    pub remote: Option<String>,
}

/// Query defaults from `[defaults]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_flavor")]
    pub flavor: String,
    #[serde(default, rename = "ignore-local-builds")]
    pub ignore_local_builds: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            flavor: default_flavor(),
            ignore_local_builds: false,
        }
    }
}

fn default_flavor() -> String {
    DEFAULT_FLAVOR.to_string()
}

impl GlobalConfig {
    /// Load from the default location, or return defaults if the file doesn't exist.
    pub fn load() -> JugglerResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`, or return defaults if it is not a file.
    pub fn load_from(path: &Path) -> JugglerResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| JugglerError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content).map_err(|e| JugglerError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Configured local repository directory, with `~` expanded.
    pub fn local_repository(&self) -> Option<PathBuf> {
        self.repository
            .local
            .as_deref()
            .map(juggler_util::fs::expand_home)
    }

    /// The pinned spec for `name`, if any.
    ///
    /// A pin that is not a string is [`JugglerError::InvalidType`]; a string
    /// outside the version grammar is [`JugglerError::InvalidString`].
    pub fn pinned_spec(&self, name: &str) -> JugglerResult<Option<VersionSpec>> {
        self.pins
            .get(name)
            .map(VersionSpec::try_from)
            .transpose()
    }
}

/// Returns the Juggler data directory: `$JUGGLER_HOME`, else `~/.juggler/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var("JUGGLER_HOME") {
        return PathBuf::from(home);
    }
    juggler_util::fs::expand_home("~/.juggler")
}
