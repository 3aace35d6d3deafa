/// Qualifies bare semantic type names with a vocabulary.
pub trait SemanticMapping: Send + Sync {
	/// Returns the vocabulary-qualified name of `entity_name`.
	///
	/// `vocab` of `None` means the mapping's default vocabulary.
	fn qualified_type_name(&self, entity_name: &str, vocab: Option<&str>) -> String;
}

/// `{vocab}:{entity}` qualification with a fixed default vocabulary.
#[derive(Debug, Clone)]
pub struct DefaultSemanticMapping {
	default_vocabulary: String,
}

impl DefaultSemanticMapping {
	pub fn new(default_vocabulary: impl Into<String>) -> Self {
		Self {
			default_vocabulary: default_vocabulary.into(),
		}
	}

	pub fn default_vocabulary(&self) -> &str {
		&self.default_vocabulary
	}
}

impl Default for DefaultSemanticMapping {
	fn default() -> Self {
		Self::new(dxa_model::CORE_VOCABULARY)
	}
}

impl SemanticMapping for DefaultSemanticMapping {
	fn qualified_type_name(&self, entity_name: &str, vocab: Option<&str>) -> String {
		let vocab = match vocab {
			Some(v) if !v.is_empty() => v,
			_ => self.default_vocabulary.as_str(),
		};
		format!("{vocab}:{entity_name}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn qualifies_with_default_vocabulary() {
		let mapping = DefaultSemanticMapping::default();
		assert_eq!(mapping.qualified_type_name("Teaser", None), "http://www.sdl.com/web/schemas/core:Teaser");
		assert_eq!(mapping.qualified_type_name("Teaser", Some("")), "http://www.sdl.com/web/schemas/core:Teaser");
	}

	#[test]
	fn qualifies_with_explicit_vocabulary() {
		let mapping = DefaultSemanticMapping::new("urn:test");
		assert_eq!(mapping.qualified_type_name("Article", Some("http://schema.org/")), "http://schema.org/:Article");
		assert_eq!(mapping.qualified_type_name("Article", None), "urn:test:Article");
	}
}
