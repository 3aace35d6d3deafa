use std::collections::BTreeMap;

use crate::impl_view_model;

#[derive(Debug, Clone, Default)]
pub struct PageModel {
	pub id: String,
	pub name: String,
	pub title: Option<String>,
	pub meta: BTreeMap<String, String>,
	pub regions: Vec<RegionModel>,
}

impl_view_model!(PageModel);

#[derive(Debug, Clone, Default)]
pub struct RegionModel {
	pub name: String,
	pub regions: Vec<RegionModel>,
}

impl_view_model!(RegionModel);
