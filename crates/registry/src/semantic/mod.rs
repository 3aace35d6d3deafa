//! Semantic metadata derived from model type descriptors.
//!
//! # Role
//!
//! [`SemanticExtractor`] turns the static tables of a [`dxa_model::ModelType`]
//! into a [`SemanticInfo`] record. It is stateless; memoization lives in the
//! registry.

mod extract;
mod mapping;

use indexmap::IndexMap;

pub use extract::SemanticExtractor;
pub use mapping::{DefaultSemanticMapping, SemanticMapping};

/// Semantic classification of one model type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticInfo {
	/// Prefix to vocabulary bindings declared by public entities.
	pub prefix_mappings: IndexMap<String, String>,
	/// `prefix:entity` names, in declaration order.
	pub public_semantic_types: Vec<String>,
	/// Vocabulary-qualified type names; the built-in entry comes first.
	pub mapped_semantic_types: Vec<String>,
	/// Member name to qualified semantic property names.
	pub semantic_properties: IndexMap<String, Vec<String>>,
}

impl SemanticInfo {
	pub fn semantic_property_names(&self, member: &str) -> Option<&[String]> {
		self.semantic_properties.get(member).map(Vec::as_slice)
	}
}
