use std::time::Duration;

/// Errors produced by the view model registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The writer gate could not be acquired within the configured bound.
	#[error("registry lock not acquired within {timeout:?}")]
	LockTimeout { timeout: Duration },

	/// Two semantic entities on one model type bind the same prefix to different vocabularies.
	#[error(
		"model type '{model_type}' uses semantic prefix '{prefix}' for vocabulary '{vocab}', but it is already used for vocabulary '{registered_vocab}'"
	)]
	MetadataConflict {
		model_type: &'static str,
		prefix: String,
		vocab: String,
		registered_vocab: String,
	},

	/// No registered view matched the query after both matching passes.
	#[error("no view model registered for {query}")]
	NotFound { query: String },

	/// A view key was built with a blank mandatory field.
	#[error("invalid view key: {field} must not be empty")]
	InvalidKey { field: &'static str },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors loading [`crate::RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse registry config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid registry config: {0}")]
	Invalid(String),
}
