//! View model types and their static semantic descriptors.
//!
//! Model types never carry runtime annotations. Each type declares its semantic
//! classification once, at compile time, through the [`ViewModel`] capability
//! table. The registry reads that table through an opaque [`ModelType`] handle
//! and never constructs model instances itself.

/// Built-in entity models of the core module.
pub mod entity;
/// Opaque model type handles and the capability table trait.
pub mod model_type;
/// Page and region models.
pub mod page;
/// Declarative semantic entity and property descriptors.
pub mod semantic;

pub use model_type::{ModelType, ViewModel};
pub use page::{PageModel, RegionModel};
pub use semantic::{CORE_VOCABULARY, SCHEMA_ORG_VOCABULARY, SemanticEntity, SemanticProperty};
