//! Startup registration of view models.
//!
//! [`CORE_VIEWS`] lists the core module's views in registration order. Other
//! crates add their own views at link time:
//!
//! ```ignore
//! dxa_registry::inventory::submit! {
//! 	dxa_registry::ViewModelReg::entity("Search:Results", dxa_model::ModelType::of::<SearchResults>)
//! }
//! ```

use dxa_model::ModelType;
use dxa_model::entity::{
	Article, Configuration, ContentList, Download, Image, ItemList, LinkList, NavigationLinks, Notification, Place,
	SitemapItem, TagLinkList, Teaser, YouTubeVideo,
};
use dxa_model::{PageModel, RegionModel};
use tracing::info;

use crate::error::Result;
use crate::index::{Registration, ViewModelRegistry};
use crate::key::{KeyDefaults, ViewKey};

/// Registration category; selects the key presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
	Entity,
	Page,
	Region,
}

/// Static registration of one view.
#[derive(Debug, Clone, Copy)]
pub struct ViewModelReg {
	pub kind: ViewKind,
	pub view_name: &'static str,
	pub model_type: fn() -> ModelType,
}

inventory::collect!(ViewModelReg);

impl ViewModelReg {
	pub const fn entity(view_name: &'static str, model_type: fn() -> ModelType) -> Self {
		Self {
			kind: ViewKind::Entity,
			view_name,
			model_type,
		}
	}

	pub const fn page(view_name: &'static str, model_type: fn() -> ModelType) -> Self {
		Self {
			kind: ViewKind::Page,
			view_name,
			model_type,
		}
	}

	pub const fn region(view_name: &'static str, model_type: fn() -> ModelType) -> Self {
		Self {
			kind: ViewKind::Region,
			view_name,
			model_type,
		}
	}

	pub fn key(&self, defaults: &KeyDefaults) -> Result<ViewKey> {
		match self.kind {
			ViewKind::Entity => ViewKey::entity(self.view_name, defaults),
			ViewKind::Page => ViewKey::page(self.view_name, defaults),
			ViewKind::Region => ViewKey::region(self.view_name, defaults),
		}
	}
}

pub static CORE_VIEWS: &[ViewModelReg] = &[
	ViewModelReg::entity("Article", ModelType::of::<Article>),
	ViewModelReg::entity("Breadcrumb", ModelType::of::<NavigationLinks>),
	ViewModelReg::entity("Carousel", ModelType::of::<ItemList>),
	ViewModelReg::entity("CookieNotificationBar", ModelType::of::<Notification>),
	ViewModelReg::entity("Download", ModelType::of::<Download>),
	ViewModelReg::entity("FooterLinkGroup", ModelType::of::<LinkList>),
	ViewModelReg::entity("FooterLinks", ModelType::of::<LinkList>),
	ViewModelReg::entity("HeaderLinks", ModelType::of::<LinkList>),
	ViewModelReg::entity("HeaderLogo", ModelType::of::<Teaser>),
	ViewModelReg::entity("Image", ModelType::of::<Image>),
	ViewModelReg::entity("LeftNavigation", ModelType::of::<NavigationLinks>),
	ViewModelReg::entity("LanguageSelector", ModelType::of::<Configuration>),
	ViewModelReg::entity("List", ModelType::of::<ContentList>),
	ViewModelReg::entity("OldBrowserNotificationBar", ModelType::of::<Notification>),
	ViewModelReg::entity("PagedList", ModelType::of::<ContentList>),
	ViewModelReg::entity("Place", ModelType::of::<Place>),
	ViewModelReg::entity("SiteMap", ModelType::of::<SitemapItem>),
	ViewModelReg::entity("SiteMapXml", ModelType::of::<SitemapItem>),
	ViewModelReg::entity("SocialLinks", ModelType::of::<TagLinkList>),
	ViewModelReg::entity("SocialSharing", ModelType::of::<TagLinkList>),
	ViewModelReg::entity("Tab", ModelType::of::<ItemList>),
	ViewModelReg::entity("Teaser-ImageOverlay", ModelType::of::<Teaser>),
	ViewModelReg::entity("Teaser", ModelType::of::<Teaser>),
	ViewModelReg::entity("TeaserColored", ModelType::of::<Teaser>),
	ViewModelReg::entity("TeaserHero-ImageOverlay", ModelType::of::<Teaser>),
	ViewModelReg::entity("TeaserMap", ModelType::of::<Teaser>),
	ViewModelReg::entity("ThumbnailList", ModelType::of::<ContentList>),
	ViewModelReg::entity("TopNavigation", ModelType::of::<NavigationLinks>),
	ViewModelReg::entity("YouTubeVideo", ModelType::of::<YouTubeVideo>),
	ViewModelReg::page("GeneralPage", ModelType::of::<PageModel>),
	ViewModelReg::page("IncludePage", ModelType::of::<PageModel>),
	ViewModelReg::page("RedirectPage", ModelType::of::<PageModel>),
	ViewModelReg::region("2-Column", ModelType::of::<RegionModel>),
	ViewModelReg::region("3-Column", ModelType::of::<RegionModel>),
	ViewModelReg::region("4-Column", ModelType::of::<RegionModel>),
	ViewModelReg::region("Hero", ModelType::of::<RegionModel>),
	ViewModelReg::region("Info", ModelType::of::<RegionModel>),
	ViewModelReg::region("Left", ModelType::of::<RegionModel>),
	ViewModelReg::region("Links", ModelType::of::<RegionModel>),
	ViewModelReg::region("Logo", ModelType::of::<RegionModel>),
	ViewModelReg::region("Main", ModelType::of::<RegionModel>),
	ViewModelReg::region("Nav", ModelType::of::<RegionModel>),
	ViewModelReg::region("Tools", ModelType::of::<RegionModel>),
	ViewModelReg::region("Header", ModelType::of::<RegionModel>),
	ViewModelReg::region("Footer", ModelType::of::<RegionModel>),
	ViewModelReg::region("Left Navigation", ModelType::of::<RegionModel>),
	ViewModelReg::region("Content Tools", ModelType::of::<RegionModel>),
];

/// Registers [`CORE_VIEWS`] followed by every [`ViewModelReg`] submitted through `inventory`.
///
/// Runs as one batch; any error leaves the registry untouched.
pub fn bootstrap(registry: &ViewModelRegistry) -> Result<Vec<Registration>> {
	let defaults = registry.key_defaults();
	let entries = CORE_VIEWS
		.iter()
		.chain(inventory::iter::<ViewModelReg>)
		.map(|reg| -> Result<_> { Ok((Some(reg.key(defaults)?), (reg.model_type)())) })
		.collect::<Result<Vec<_>>>()?;

	let outcomes = registry.register_all(entries)?;
	let inserted = outcomes.iter().filter(|o| **o == Registration::Inserted).count();
	info!(views = inserted, submitted = outcomes.len(), "view model registry bootstrapped");
	Ok(outcomes)
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use dxa_model::impl_view_model;

	use super::*;
	use crate::semantic::{DefaultSemanticMapping, SemanticExtractor};

	struct SearchResults;
	impl_view_model!(SearchResults);

	inventory::submit! {
		ViewModelReg::entity("Search:Results", ModelType::of::<SearchResults>)
	}

	fn registry() -> ViewModelRegistry {
		ViewModelRegistry::new(SemanticExtractor::new(Arc::new(DefaultSemanticMapping::default())))
	}

	#[test]
	fn core_views_have_distinct_keys() {
		let defaults = KeyDefaults::default();
		let mut keys: Vec<_> = CORE_VIEWS.iter().map(|reg| reg.key(&defaults).unwrap()).collect();
		let total = keys.len();
		keys.sort_by_key(|k| k.to_string());
		keys.dedup();
		assert_eq!(keys.len(), total);
		assert_eq!(total, 47);
	}

	#[test]
	fn bootstrap_registers_core_and_submitted_views() {
		let registry = registry();
		let outcomes = bootstrap(&registry).unwrap();
		assert!(outcomes.iter().all(|o| *o == Registration::Inserted));
		assert_eq!(registry.len(), CORE_VIEWS.len() + inventory::iter::<ViewModelReg>.into_iter().count());
		assert_eq!(registry.get_view_entity_class("Search:Results"), Ok(ModelType::of::<SearchResults>()));
		assert_eq!(registry.get_view_entity_class("TeaserMap"), Ok(ModelType::of::<Teaser>()));
	}

	#[test]
	fn second_bootstrap_keeps_existing() {
		let registry = registry();
		bootstrap(&registry).unwrap();
		let before = registry.snapshot();
		let outcomes = bootstrap(&registry).unwrap();
		assert!(outcomes.iter().all(|o| *o == Registration::KeptExisting));
		assert!(Arc::ptr_eq(&before, &registry.snapshot()));
	}
}
