//! Opaque model type handles.
//!
//! # Role
//!
//! [`ViewModel`] is the capability table a model type attaches to itself at
//! compile time. [`ModelType`] is the `Copy` handle the registry stores and
//! hands back; its identity is the Rust [`TypeId`] of the model type.

use std::any::TypeId;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::semantic::{SemanticEntity, SemanticProperty};

/// Compile-time semantic descriptor table of a model type.
pub trait ViewModel: 'static {
	/// Type-level semantic entities, in declaration order.
	const SEMANTIC_ENTITIES: &'static [SemanticEntity] = &[];
	/// Property-level semantic mappings, in declaration order.
	const SEMANTIC_PROPERTIES: &'static [SemanticProperty] = &[];
}

/// Implements [`ViewModel`] for a type, optionally declaring its semantic tables.
///
/// ```
/// use dxa_model::{SCHEMA_ORG_VOCABULARY, SemanticEntity, SemanticProperty, impl_view_model};
///
/// struct Event;
/// impl_view_model!(Event,
/// 	entities: [SemanticEntity::public("Event", SCHEMA_ORG_VOCABULARY, "s")],
/// 	properties: [SemanticProperty::new("name", "s:name")],
/// );
/// ```
#[macro_export]
macro_rules! impl_view_model {
	($type:ty, entities: [$($entity:expr),* $(,)?] $(, properties: [$($prop:expr),* $(,)?])? $(,)?) => {
		impl $crate::ViewModel for $type {
			const SEMANTIC_ENTITIES: &'static [$crate::SemanticEntity] = &[$($entity),*];
			$(const SEMANTIC_PROPERTIES: &'static [$crate::SemanticProperty] = &[$($prop),*];)?
		}
	};
	($type:ty) => {
		impl $crate::ViewModel for $type {}
	};
}

/// Handle to a registered model type.
#[derive(Clone, Copy)]
pub struct ModelType {
	id: TypeId,
	full_name: &'static str,
	entities: &'static [SemanticEntity],
	properties: &'static [SemanticProperty],
}

impl ModelType {
	/// Returns the handle of `T`.
	pub fn of<T: ViewModel>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			full_name: std::any::type_name::<T>(),
			entities: T::SEMANTIC_ENTITIES,
			properties: T::SEMANTIC_PROPERTIES,
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified Rust path of the model type.
	pub fn full_name(&self) -> &'static str {
		self.full_name
	}

	/// Type name without module path or generic arguments.
	pub fn bare_name(&self) -> &'static str {
		let base = match self.full_name.find('<') {
			Some(idx) => &self.full_name[..idx],
			None => self.full_name,
		};
		base.rsplit("::").next().unwrap_or(base)
	}

	pub fn semantic_entities(&self) -> &'static [SemanticEntity] {
		self.entities
	}

	pub fn semantic_properties(&self) -> &'static [SemanticProperty] {
		self.properties
	}
}

impl PartialEq for ModelType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for ModelType {}

impl Hash for ModelType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl PartialOrd for ModelType {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ModelType {
	fn cmp(&self, other: &Self) -> Ordering {
		self.full_name.cmp(other.full_name).then_with(|| self.id.cmp(&other.id))
	}
}

impl std::fmt::Debug for ModelType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("ModelType").field(&self.full_name).finish()
	}
}

impl std::fmt::Display for ModelType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.full_name)
	}
}
