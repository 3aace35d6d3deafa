//! View keys and the lookup matching rules.
//!
//! # Role
//!
//! A [`ViewKey`] locates a registered model type by scope attributes. Storage
//! uses plain structural equality; lookups use [`ViewKey::matches`], which runs
//! in two passes (see [`MatchPass`]).
//!
//! # Invariants
//!
//! - `view_name` and `area_name` are never blank.
//! - Optional fields match only when both sides are absent, or both are present
//!   and equal. The action name never takes part in matching.

use std::fmt;

use crate::error::{RegistryError, Result};

/// Category presets applied to page, region and entity keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDefaults {
	pub area: String,
	pub page_controller: String,
	pub page_action: String,
	pub region_controller: String,
	pub region_action: String,
}

impl Default for KeyDefaults {
	fn default() -> Self {
		Self {
			area: "Core".into(),
			page_controller: "Page".into(),
			page_action: "Page".into(),
			region_controller: "Region".into(),
			region_action: "Region".into(),
		}
	}
}

/// Matching pass used by [`ViewKey::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPass {
	/// Area name must be equal.
	Exact,
	/// Fallback pass: area name is ignored.
	NoArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
	area_name: String,
	controller_area_name: Option<String>,
	controller_name: Option<String>,
	action_name: Option<String>,
	view_name: String,
}

/// Builds a canonical key from a partial descriptor.
pub fn make_key(
	view_name: &str,
	controller_area_name: Option<&str>,
	controller_name: Option<&str>,
	action_name: Option<&str>,
	area_name: &str,
) -> Result<ViewKey> {
	Ok(ViewKey {
		controller_area_name: controller_area_name.map(str::to_string),
		controller_name: controller_name.map(str::to_string),
		action_name: action_name.map(str::to_string),
		..ViewKey::new(view_name, area_name)?
	})
}

impl ViewKey {
	/// Creates a key with only the mandatory fields set.
	pub fn new(view_name: impl Into<String>, area_name: impl Into<String>) -> Result<Self> {
		let view_name = view_name.into();
		let area_name = area_name.into();
		if view_name.trim().is_empty() {
			return Err(RegistryError::InvalidKey { field: "view_name" });
		}
		if area_name.trim().is_empty() {
			return Err(RegistryError::InvalidKey { field: "area_name" });
		}
		Ok(Self {
			area_name,
			controller_area_name: None,
			controller_name: None,
			action_name: None,
			view_name,
		})
	}

	/// Entity view key from an optionally area-qualified name (`Area:View`).
	///
	/// Only the first two `:`-separated segments count; `A:B:C` names view `B`.
	pub fn entity(qualified_view_name: &str, defaults: &KeyDefaults) -> Result<Self> {
		let mut parts = qualified_view_name.split(':');
		match (parts.next(), parts.next()) {
			(Some(area), Some(view)) => Self::new(view, area),
			_ => Self::new(qualified_view_name, defaults.area.as_str()),
		}
	}

	/// Page view key with the page controller presets.
	pub fn page(qualified_view_name: &str, defaults: &KeyDefaults) -> Result<Self> {
		Ok(Self::entity(qualified_view_name, defaults)?
			.with_controller_area(defaults.area.as_str())
			.with_controller(defaults.page_controller.as_str())
			.with_action(defaults.page_action.as_str()))
	}

	/// Region view key with the region controller presets.
	pub fn region(qualified_view_name: &str, defaults: &KeyDefaults) -> Result<Self> {
		Ok(Self::entity(qualified_view_name, defaults)?
			.with_controller_area(defaults.area.as_str())
			.with_controller(defaults.region_controller.as_str())
			.with_action(defaults.region_action.as_str()))
	}

	pub fn with_controller_area(mut self, name: impl Into<String>) -> Self {
		self.controller_area_name = Some(name.into());
		self
	}

	pub fn with_controller(mut self, name: impl Into<String>) -> Self {
		self.controller_name = Some(name.into());
		self
	}

	pub fn with_action(mut self, name: impl Into<String>) -> Self {
		self.action_name = Some(name.into());
		self
	}

	pub fn area_name(&self) -> &str {
		&self.area_name
	}

	pub fn controller_area_name(&self) -> Option<&str> {
		self.controller_area_name.as_deref()
	}

	pub fn controller_name(&self) -> Option<&str> {
		self.controller_name.as_deref()
	}

	pub fn action_name(&self) -> Option<&str> {
		self.action_name.as_deref()
	}

	pub fn view_name(&self) -> &str {
		&self.view_name
	}

	/// Returns true if this stored key satisfies `query` under `pass`.
	pub fn matches(&self, query: &ViewKey, pass: MatchPass) -> bool {
		self.view_name == query.view_name
			&& self.controller_area_name == query.controller_area_name
			&& self.controller_name == query.controller_name
			&& (pass == MatchPass::NoArea || self.area_name == query.area_name)
	}
}

impl fmt::Display for ViewKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
		write!(
			f,
			"{}:{}/{}/{}/{}",
			self.area_name,
			opt(&self.controller_area_name),
			opt(&self.controller_name),
			opt(&self.action_name),
			self.view_name
		)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn defaults() -> KeyDefaults {
		KeyDefaults::default()
	}

	#[rstest]
	#[case("", "Core", "view_name")]
	#[case("  ", "Core", "view_name")]
	#[case("Teaser", "", "area_name")]
	fn blank_mandatory_fields(#[case] view: &str, #[case] area: &str, #[case] field: &'static str) {
		assert_eq!(ViewKey::new(view, area), Err(RegistryError::InvalidKey { field }));
	}

	#[test]
	fn make_key_sets_optional_fields() {
		let key = make_key("Teaser", Some("Core"), Some("Entity"), None, "Core").unwrap();
		assert_eq!(key.controller_area_name(), Some("Core"));
		assert_eq!(key.controller_name(), Some("Entity"));
		assert_eq!(key.action_name(), None);
	}

	#[rstest]
	#[case("Search:Results", "Search", "Results")]
	#[case("Teaser", "Core", "Teaser")]
	#[case("Search:Results:Extra", "Search", "Results")]
	fn entity_key_parses_area_qualifier(#[case] name: &str, #[case] area: &str, #[case] view: &str) {
		let key = ViewKey::entity(name, &defaults()).unwrap();
		assert_eq!(key.area_name(), area);
		assert_eq!(key.view_name(), view);
	}

	#[test]
	fn entity_key_rejects_empty_qualified_parts() {
		assert!(ViewKey::entity(":Teaser", &defaults()).is_err());
		assert!(ViewKey::entity("Core:", &defaults()).is_err());
	}

	#[test]
	fn page_and_region_presets() {
		let page = ViewKey::page("GeneralPage", &defaults()).unwrap();
		assert_eq!(page.controller_area_name(), Some("Core"));
		assert_eq!(page.controller_name(), Some("Page"));
		assert_eq!(page.action_name(), Some("Page"));
		assert_eq!(page.area_name(), "Core");

		let region = ViewKey::region("Main", &defaults()).unwrap();
		assert_eq!(region.controller_name(), Some("Region"));
		assert_eq!(region.action_name(), Some("Region"));
	}

	#[rstest]
	#[case::page(ViewKey::page("Custom:Home", &defaults()).unwrap(), "Page")]
	#[case::region(ViewKey::region("Custom:Home", &defaults()).unwrap(), "Region")]
	fn page_and_region_keys_parse_area_qualifier(#[case] key: ViewKey, #[case] controller: &str) {
		assert_eq!(key.area_name(), "Custom");
		assert_eq!(key.view_name(), "Home");
		assert_eq!(key.controller_area_name(), Some("Core"));
		assert_eq!(key.controller_name(), Some(controller));
	}

	#[test]
	fn absent_field_does_not_match_present_field() {
		let stored = ViewKey::new("Teaser", "Core").unwrap();
		let query = ViewKey::new("Teaser", "Core").unwrap().with_controller_area("X");
		assert!(!stored.matches(&query, MatchPass::Exact));
		assert!(!stored.matches(&query, MatchPass::NoArea));
		assert!(stored.matches(&ViewKey::new("Teaser", "Core").unwrap(), MatchPass::Exact));
	}

	#[test]
	fn action_name_is_ignored() {
		let stored = ViewKey::page("GeneralPage", &defaults()).unwrap();
		let query = ViewKey::page("GeneralPage", &defaults()).unwrap().with_action("Other");
		assert!(stored.matches(&query, MatchPass::Exact));
	}

	#[test]
	fn no_area_pass_ignores_area() {
		let stored = ViewKey::new("Teaser", "Core").unwrap();
		let query = ViewKey::new("Teaser", "Custom").unwrap();
		assert!(!stored.matches(&query, MatchPass::Exact));
		assert!(stored.matches(&query, MatchPass::NoArea));
	}

	#[test]
	fn display_marks_absent_fields() {
		let key = ViewKey::new("Teaser", "Core").unwrap().with_controller("Entity");
		assert_eq!(key.to_string(), "Core:-/Entity/-/Teaser");
	}
}
