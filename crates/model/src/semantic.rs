/// Vocabulary used for built-in semantic type names.
pub const CORE_VOCABULARY: &str = "http://www.sdl.com/web/schemas/core";

/// The schema.org vocabulary.
pub const SCHEMA_ORG_VOCABULARY: &str = "http://schema.org/";

/// Type-level semantic classification of a model type.
///
/// A public entity with a non-blank prefix contributes a `prefix:entity` public
/// semantic type and binds `prefix` to `vocab` for the declaring type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticEntity {
	pub entity_name: &'static str,
	pub vocab: &'static str,
	pub prefix: &'static str,
	pub public: bool,
}

impl SemanticEntity {
	/// Creates a non-public entity in the given vocabulary.
	pub const fn new(entity_name: &'static str, vocab: &'static str) -> Self {
		Self {
			entity_name,
			vocab,
			prefix: "",
			public: false,
		}
	}

	/// Creates a public entity bound to `prefix`.
	pub const fn public(entity_name: &'static str, vocab: &'static str, prefix: &'static str) -> Self {
		Self {
			entity_name,
			vocab,
			prefix,
			public: true,
		}
	}

	/// Returns the prefix when this entity declares a usable public prefix.
	pub fn public_prefix(&self) -> Option<&'static str> {
		if self.public && !self.prefix.trim().is_empty() {
			Some(self.prefix)
		} else {
			None
		}
	}
}

/// Property-level semantic mapping: `member` is exposed as `property_name`.
///
/// `property_name` is expected in `prefix:name` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticProperty {
	pub member: &'static str,
	pub property_name: &'static str,
}

impl SemanticProperty {
	pub const fn new(member: &'static str, property_name: &'static str) -> Self {
		Self { member, property_name }
	}

	/// Splits the property name into `(prefix, name)`.
	pub fn split_prefix(&self) -> Option<(&'static str, &'static str)> {
		let (prefix, name) = self.property_name.split_once(':')?;
		if prefix.is_empty() {
			return None;
		}
		Some((prefix, name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_prefix_is_not_public() {
		let entity = SemanticEntity::public("Article", SCHEMA_ORG_VOCABULARY, "  ");
		assert_eq!(entity.public_prefix(), None);
	}

	#[test]
	fn private_entity_has_no_prefix() {
		let entity = SemanticEntity {
			prefix: "s",
			..SemanticEntity::new("Article", SCHEMA_ORG_VOCABULARY)
		};
		assert_eq!(entity.public_prefix(), None);
	}

	#[test]
	fn property_prefix_split() {
		assert_eq!(SemanticProperty::new("headline", "s:headline").split_prefix(), Some(("s", "headline")));
		assert_eq!(SemanticProperty::new("headline", "headline").split_prefix(), None);
		assert_eq!(SemanticProperty::new("headline", ":headline").split_prefix(), None);
	}
}
