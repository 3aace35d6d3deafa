//! Immutable registry state.
//!
//! # Role
//!
//! A [`Snapshot`] is what readers see. Writers clone the current snapshot,
//! mutate the clone, and publish it whole. Each map sits behind its own `Arc`,
//! so a publication only copies the maps it touched.
//!
//! # Invariants
//!
//! - A published snapshot is never mutated.
//! - `views` keeps first-insertion order; lookups scan in that order.

use std::sync::Arc;

use dxa_model::ModelType;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::key::{MatchPass, ViewKey};
use crate::semantic::SemanticInfo;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	pub(crate) views: Arc<IndexMap<ViewKey, ModelType>>,
	pub(crate) semantic_info: Arc<FxHashMap<ModelType, Arc<SemanticInfo>>>,
	pub(crate) by_semantic_type: Arc<FxHashMap<String, Vec<ModelType>>>,
}

impl Snapshot {
	/// Resolves `query` with the exact pass, then the no-area pass.
	///
	/// Among several candidates of one pass, the earliest registered wins. That
	/// order is stable within a process but not part of the contract.
	pub fn find_view(&self, query: &ViewKey) -> Option<(&ViewKey, ModelType)> {
		[MatchPass::Exact, MatchPass::NoArea].into_iter().find_map(|pass| {
			self.views
				.iter()
				.find(|(stored, _)| stored.matches(query, pass))
				.map(|(stored, ty)| (stored, *ty))
		})
	}

	/// First view registered under `area_name` and `view_name`, ignoring controllers.
	pub fn find_entity_view(&self, area_name: &str, view_name: &str) -> Option<(&ViewKey, ModelType)> {
		self.views
			.iter()
			.find(|(stored, _)| stored.area_name() == area_name && stored.view_name() == view_name)
			.map(|(stored, ty)| (stored, *ty))
	}

	pub fn contains_view(&self, key: &ViewKey) -> bool {
		self.views.contains_key(key)
	}

	pub fn semantic_info(&self, model_type: ModelType) -> Option<&Arc<SemanticInfo>> {
		self.semantic_info.get(&model_type)
	}

	pub fn mapped_model_types(&self, semantic_type_name: &str) -> &[ModelType] {
		self.by_semantic_type
			.get(semantic_type_name)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Registered views in registration order.
	pub fn views(&self) -> impl Iterator<Item = (&ViewKey, ModelType)> + '_ {
		self.views.iter().map(|(key, ty)| (key, *ty))
	}

	pub fn len(&self) -> usize {
		self.views.len()
	}

	pub fn is_empty(&self) -> bool {
		self.views.is_empty()
	}

	/// Number of model types with memoized semantic info.
	pub fn model_type_count(&self) -> usize {
		self.semantic_info.len()
	}

	pub(crate) fn insert_view(&mut self, key: ViewKey, model_type: ModelType) {
		Arc::make_mut(&mut self.views).insert(key, model_type);
	}

	/// Memoizes `info` and appends `model_type` under each mapped semantic type.
	///
	/// The secondary index is append-only and not deduplicated: a type whose
	/// info lists one semantic type twice appears twice in that list.
	pub(crate) fn insert_semantic_info(&mut self, model_type: ModelType, info: Arc<SemanticInfo>) {
		let index = Arc::make_mut(&mut self.by_semantic_type);
		for name in &info.mapped_semantic_types {
			index.entry(name.clone()).or_default().push(model_type);
		}
		Arc::make_mut(&mut self.semantic_info).insert(model_type, info);
	}
}
