//! Registry configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty document yields
//! [`RegistryConfig::default`].

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::key::KeyDefaults;

/// Default upper bound on waiting for the writer gate.
pub(crate) const DEFAULT_LOCK_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Upper bound on waiting for the registry writer gate.
	pub lock_timeout_ms: u64,
	/// Area assumed for view names without an `Area:` qualifier.
	pub default_area: String,
	pub page_controller: String,
	pub page_action: String,
	pub region_controller: String,
	pub region_action: String,
	/// Vocabulary used when qualifying bare model type names.
	pub default_vocabulary: String,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		let keys = KeyDefaults::default();
		Self {
			lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
			default_area: keys.area,
			page_controller: keys.page_controller,
			page_action: keys.page_action,
			region_controller: keys.region_controller,
			region_action: keys.region_action,
			default_vocabulary: dxa_model::CORE_VOCABULARY.to_string(),
		}
	}
}

impl RegistryConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.display().to_string(),
			source,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), timeout_ms = config.lock_timeout_ms, "registry config loaded");
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.lock_timeout_ms == 0 {
			return Err(ConfigError::Invalid("lock_timeout_ms must be greater than zero".into()));
		}
		let names = [
			("default_area", &self.default_area),
			("page_controller", &self.page_controller),
			("page_action", &self.page_action),
			("region_controller", &self.region_controller),
			("region_action", &self.region_action),
			("default_vocabulary", &self.default_vocabulary),
		];
		for (field, value) in names {
			if value.trim().is_empty() {
				return Err(ConfigError::Invalid(format!("{field} must not be blank")));
			}
		}
		Ok(())
	}

	pub fn lock_timeout(&self) -> Duration {
		Duration::from_millis(self.lock_timeout_ms)
	}

	pub fn key_defaults(&self) -> KeyDefaults {
		KeyDefaults {
			area: self.default_area.clone(),
			page_controller: self.page_controller.clone(),
			page_action: self.page_action.clone(),
			region_controller: self.region_controller.clone(),
			region_action: self.region_action.clone(),
		}
	}
}
