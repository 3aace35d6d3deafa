//! Concurrent view model registry.
//!
//! Maps view scopes ([`ViewKey`]) to model types ([`dxa_model::ModelType`]) and
//! indexes every registered type by its semantic type names. Registration is
//! serialized behind one writer gate with a bounded wait; lookups read an
//! immutable, atomically published [`Snapshot`].
//!
//! # Modules
//!
//! - [`key`] - view keys and lookup matching
//! - [`semantic`] - semantic metadata extraction
//! - [`index`] - the registry and its snapshots
//! - [`bootstrap`] - startup registration lists
//! - [`config`] - TOML configuration
//!
//! The registry is an ordinary value: construct one at startup, bootstrap it,
//! and share it by reference or `Arc`.
//!
//! ```
//! use dxa_registry::{RegistryConfig, ViewKey, ViewModelRegistry, bootstrap};
//!
//! let registry = ViewModelRegistry::from_config(&RegistryConfig::default());
//! bootstrap(&registry).unwrap();
//!
//! let key = ViewKey::page("GeneralPage", registry.key_defaults()).unwrap();
//! let model = registry.get_view_model_type(&key).unwrap();
//! assert_eq!(model.bare_name(), "PageModel");
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod index;
pub mod key;
pub mod semantic;

pub use bootstrap::{CORE_VIEWS, ViewKind, ViewModelReg, bootstrap};
pub use config::RegistryConfig;
pub use error::{ConfigError, RegistryError, Result};
pub use index::{Registration, Snapshot, ViewModelRegistry};
pub use inventory;
pub use key::{KeyDefaults, MatchPass, ViewKey, make_key};
pub use semantic::{DefaultSemanticMapping, SemanticExtractor, SemanticInfo, SemanticMapping};
