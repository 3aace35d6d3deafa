//! View model index.
//!
//! # Mental Model
//!
//! 1. **Registration:** [`ViewModelRegistry::register_view_model`] maps a
//!    [`crate::ViewKey`] to a [`dxa_model::ModelType`] and memoizes the type's
//!    [`crate::SemanticInfo`], indexing it by every mapped semantic type name.
//! 2. **Publication:** each successful mutation publishes a fresh [`Snapshot`].
//! 3. **Consumption:** lookups read the published snapshot without locking.
//!
//! # Invariants
//!
//! - First registration of a view key wins; later ones are logged and ignored.
//!   - Enforced in: `ViewModelRegistry::register_into`.
//!   - Tested by: `tests::duplicate_key_keeps_first_mapping`.
//! - Semantic info is extracted at most once per model type.
//!   - Enforced in: `ViewModelRegistry::get_metadata` (re-check under the gate).
//!   - Tested by: `tests::concurrent_jit_extracts_once`.
//! - Concurrent registrations are never lost.
//!   - Enforced in: `ViewModelRegistry::write` (single gate, whole-snapshot publish).
//!   - Tested by: `tests::concurrent_registrations_all_land`.

mod runtime;
mod snapshot;

pub use runtime::{Registration, ViewModelRegistry};
pub use snapshot::Snapshot;
