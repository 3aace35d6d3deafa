//! Registry container with atomic snapshot publication.
//!
//! # Role
//!
//! [`ViewModelRegistry`] answers lookups against the current [`Snapshot`] and
//! serializes every mutation behind one writer gate with a bounded wait.
//!
//! # Concurrency
//!
//! - Reads load the published snapshot and never take the gate.
//! - Writes hold the gate for the whole read-modify-publish sequence, so no
//!   update is lost and readers never see a partially applied registration.
//! - A writer that cannot get the gate within the timeout fails with
//!   [`RegistryError::LockTimeout`]; nothing is published.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use dxa_model::ModelType;
use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::snapshot::Snapshot;
use crate::config::{DEFAULT_LOCK_TIMEOUT_MS, RegistryConfig};
use crate::error::{RegistryError, Result};
use crate::key::{KeyDefaults, ViewKey};
use crate::semantic::{DefaultSemanticMapping, SemanticExtractor, SemanticInfo};

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS);

/// Outcome of a successful registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
	/// The view key was new and now maps to the model type.
	Inserted,
	/// The view key was already registered; the existing mapping was kept.
	KeptExisting,
	/// No view key was given; only the model type's metadata was ensured.
	MetadataOnly,
}

pub struct ViewModelRegistry {
	pub(super) snap: ArcSwap<Snapshot>,
	pub(super) write_gate: Mutex<()>,
	extractor: SemanticExtractor,
	key_defaults: KeyDefaults,
	lock_timeout: Duration,
}

impl ViewModelRegistry {
	/// Creates an empty registry using `extractor` for metadata.
	pub fn new(extractor: SemanticExtractor) -> Self {
		Self {
			snap: ArcSwap::from_pointee(Snapshot::default()),
			write_gate: Mutex::new(()),
			extractor,
			key_defaults: KeyDefaults::default(),
			lock_timeout: DEFAULT_LOCK_TIMEOUT,
		}
	}

	/// Creates an empty registry from configuration, with the default semantic mapping.
	pub fn from_config(config: &RegistryConfig) -> Self {
		let mapping = DefaultSemanticMapping::new(config.default_vocabulary.as_str());
		Self::new(SemanticExtractor::new(Arc::new(mapping)))
			.with_key_defaults(config.key_defaults())
			.with_lock_timeout(config.lock_timeout())
	}

	pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
		self.lock_timeout = timeout;
		self
	}

	pub fn with_key_defaults(mut self, defaults: KeyDefaults) -> Self {
		self.key_defaults = defaults;
		self
	}

	pub fn key_defaults(&self) -> &KeyDefaults {
		&self.key_defaults
	}

	pub fn lock_timeout(&self) -> Duration {
		self.lock_timeout
	}

	/// Returns the currently published snapshot.
	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snap.load_full()
	}

	/// Registers `model_type` under `key`, or only ensures its metadata when `key` is `None`.
	///
	/// A key that is already registered keeps its original mapping; the call
	/// logs a warning and returns [`Registration::KeptExisting`].
	pub fn register_view_model(&self, key: Option<ViewKey>, model_type: ModelType) -> Result<Registration> {
		self.write(|next| self.register_into(next, key, model_type))
	}

	/// Registers a page view with the page controller presets.
	pub fn register_page_view_model(&self, view_name: &str, model_type: ModelType) -> Result<Registration> {
		let key = ViewKey::page(view_name, &self.key_defaults)?;
		self.register_view_model(Some(key), model_type)
	}

	/// Registers a region view with the region controller presets.
	pub fn register_region_view_model(&self, view_name: &str, model_type: ModelType) -> Result<Registration> {
		let key = ViewKey::region(view_name, &self.key_defaults)?;
		self.register_view_model(Some(key), model_type)
	}

	/// Registers an entity view by (optionally `Area:`-qualified) view name.
	pub fn register_view_entity_class(&self, view_name: &str, model_type: ModelType) -> Result<Registration> {
		let key = ViewKey::entity(view_name, &self.key_defaults)?;
		self.register_view_model(Some(key), model_type)
	}

	/// Registers a batch under a single gate acquisition and publication.
	///
	/// The batch is all-or-nothing: the first error discards every entry of it.
	pub fn register_all<I>(&self, entries: I) -> Result<Vec<Registration>>
	where
		I: IntoIterator<Item = (Option<ViewKey>, ModelType)>,
	{
		self.write(|next| {
			let mut outcomes = Vec::new();
			let mut changed = false;
			for (key, model_type) in entries {
				let (outcome, dirty) = self.register_into(next, key, model_type)?;
				outcomes.push(outcome);
				changed |= dirty;
			}
			Ok((outcomes, changed))
		})
	}

	/// Resolves the model type registered for `query`.
	pub fn get_view_model_type(&self, query: &ViewKey) -> Result<ModelType> {
		let snap = self.snap.load();
		match snap.find_view(query) {
			Some((stored, model_type)) => {
				trace!(query = %query, matched = %stored, model_type = %model_type, "view model resolved");
				Ok(model_type)
			}
			None => Err(RegistryError::NotFound {
				query: query.to_string(),
			}),
		}
	}

	/// Resolves an entity view by (optionally `Area:`-qualified) view name.
	///
	/// Only area and view name are compared; controller fields are ignored.
	pub fn get_view_entity_class(&self, view_name: &str) -> Result<ModelType> {
		let key = ViewKey::entity(view_name, &self.key_defaults)?;
		self.snap
			.load()
			.find_entity_view(key.area_name(), key.view_name())
			.map(|(_, model_type)| model_type)
			.ok_or_else(|| RegistryError::NotFound {
				query: view_name.to_string(),
			})
	}

	/// Model types indexed under a vocabulary-qualified semantic type name.
	///
	/// Returns an empty list when nothing is indexed under that name.
	pub fn get_mapped_model_types(&self, semantic_type_name: &str) -> Vec<ModelType> {
		self.snap.load().mapped_model_types(semantic_type_name).to_vec()
	}

	/// Legacy resolution that treats a semantic type name as a view name in the default area.
	///
	/// Kept next to [`Self::get_mapped_model_types`] because existing callers
	/// depend on it; the two disagree for most inputs.
	pub fn get_mapped_model_types_by_view_name(&self, semantic_type_name: &str) -> Result<ModelType> {
		let key = ViewKey::new(semantic_type_name, self.key_defaults.area.as_str())?;
		self.get_view_model_type(&key)
	}

	/// Returns the memoized semantic info of `model_type`, extracting it on first use.
	///
	/// A type seen here for the first time gets no view mapping.
	pub fn get_metadata(&self, model_type: ModelType) -> Result<Arc<SemanticInfo>> {
		if let Some(info) = self.snap.load().semantic_info(model_type) {
			return Ok(info.clone());
		}
		debug!(model_type = %model_type, "just-in-time model type registration");
		self.write(|next| {
			if let Some(info) = next.semantic_info(model_type) {
				return Ok((info.clone(), false));
			}
			let info = self.register_model_type(next, model_type)?;
			Ok((info, true))
		})
	}

	/// Public semantic types and prefix mappings of `model_type`.
	pub fn get_semantic_types(&self, model_type: ModelType) -> Result<(Vec<String>, IndexMap<String, String>)> {
		let info = self.get_metadata(model_type)?;
		Ok((info.public_semantic_types.clone(), info.prefix_mappings.clone()))
	}

	/// Semantic property names registered for `property` of `model_type`.
	pub fn get_semantic_property_names(&self, model_type: ModelType, property: &str) -> Result<Option<Vec<String>>> {
		let info = self.get_metadata(model_type)?;
		Ok(info.semantic_property_names(property).map(<[String]>::to_vec))
	}

	/// Registered views in registration order.
	pub fn views(&self) -> Vec<(ViewKey, ModelType)> {
		self.snap
			.load()
			.views()
			.map(|(key, model_type)| (key.clone(), model_type))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Runs `f` against a private copy of the snapshot under the writer gate.
	///
	/// `f` returns its result and whether the copy changed. The copy is
	/// published only on success with changes.
	fn write<R>(&self, f: impl FnOnce(&mut Snapshot) -> Result<(R, bool)>) -> Result<R> {
		let _gate = self
			.write_gate
			.try_lock_for(self.lock_timeout)
			.ok_or(RegistryError::LockTimeout {
				timeout: self.lock_timeout,
			})?;
		let mut next = Snapshot::clone(&self.snap.load());
		let (out, changed) = f(&mut next)?;
		if changed {
			self.snap.store(Arc::new(next));
		}
		Ok(out)
	}

	fn register_into(&self, next: &mut Snapshot, key: Option<ViewKey>, model_type: ModelType) -> Result<(Registration, bool)> {
		let outcome = match key {
			Some(key) if next.contains_view(&key) => {
				warn!(view = %key, model_type = %model_type, "view registered multiple times");
				return Ok((Registration::KeptExisting, false));
			}
			Some(key) => {
				next.insert_view(key, model_type);
				Registration::Inserted
			}
			None => Registration::MetadataOnly,
		};
		let mut changed = outcome == Registration::Inserted;
		if next.semantic_info(model_type).is_none() {
			self.register_model_type(next, model_type)?;
			changed = true;
		}
		Ok((outcome, changed))
	}

	fn register_model_type(&self, next: &mut Snapshot, model_type: ModelType) -> Result<Arc<SemanticInfo>> {
		let info = Arc::new(self.extractor.extract(model_type)?);
		if !info.public_semantic_types.is_empty() {
			debug!(
				model_type = %model_type,
				semantic_types = %info.public_semantic_types.join(" "),
				"model type has public semantic types"
			);
			for (member, names) in &info.semantic_properties {
				debug!(property = %member, semantic_properties = %names.join(" "), "registered semantic property");
			}
		}
		next.insert_semantic_info(model_type, info.clone());
		Ok(info)
	}
}

impl std::fmt::Debug for ViewModelRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ViewModelRegistry")
			.field("views", &self.len())
			.field("lock_timeout", &self.lock_timeout)
			.finish_non_exhaustive()
	}
}
