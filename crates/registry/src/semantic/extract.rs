use std::sync::Arc;

use dxa_model::ModelType;

use super::{SemanticInfo, SemanticMapping};
use crate::error::{RegistryError, Result};

/// Derives [`SemanticInfo`] from a model type's static descriptor tables.
#[derive(Clone)]
pub struct SemanticExtractor {
	mapping: Arc<dyn SemanticMapping>,
}

impl SemanticExtractor {
	pub fn new(mapping: Arc<dyn SemanticMapping>) -> Self {
		Self { mapping }
	}

	pub fn mapping(&self) -> &dyn SemanticMapping {
		self.mapping.as_ref()
	}

	/// Extracts the semantic record of `model_type`.
	///
	/// Fails with [`RegistryError::MetadataConflict`] when two public entities
	/// bind one prefix to different vocabularies.
	pub fn extract(&self, model_type: ModelType) -> Result<SemanticInfo> {
		let mut info = SemanticInfo::default();

		info.mapped_semantic_types
			.push(self.mapping.qualified_type_name(model_type.bare_name(), None));

		for entity in model_type.semantic_entities() {
			info.mapped_semantic_types
				.push(self.mapping.qualified_type_name(entity.entity_name, Some(entity.vocab)));

			let Some(prefix) = entity.public_prefix() else {
				continue;
			};
			match info.prefix_mappings.get(prefix) {
				Some(registered) if registered != entity.vocab => {
					return Err(RegistryError::MetadataConflict {
						model_type: model_type.full_name(),
						prefix: prefix.to_string(),
						vocab: entity.vocab.to_string(),
						registered_vocab: registered.clone(),
					});
				}
				Some(_) => {}
				None => {
					info.prefix_mappings.insert(prefix.to_string(), entity.vocab.to_string());
				}
			}
			info.public_semantic_types
				.push(format!("{prefix}:{}", entity.entity_name));
		}

		for property in model_type.semantic_properties() {
			let Some((prefix, _)) = property.split_prefix() else {
				continue;
			};
			if !info.prefix_mappings.contains_key(prefix) {
				continue;
			}
			info.semantic_properties
				.entry(property.member.to_string())
				.or_default()
				.push(property.property_name.to_string());
		}

		Ok(info)
	}
}

impl std::fmt::Debug for SemanticExtractor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SemanticExtractor").finish_non_exhaustive()
	}
}
