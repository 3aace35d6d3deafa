use super::content::Teaser;
use crate::impl_view_model;

#[derive(Debug, Clone, Default)]
pub struct Link {
	pub url: String,
	pub link_text: Option<String>,
	pub alternate_text: Option<String>,
}

impl_view_model!(Link);

#[derive(Debug, Clone, Default)]
pub struct LinkList {
	pub headline: Option<String>,
	pub links: Vec<Link>,
}

impl_view_model!(LinkList);

#[derive(Debug, Clone, Default)]
pub struct TagLink {
	pub url: String,
	pub tag: String,
}

#[derive(Debug, Clone, Default)]
pub struct TagLinkList {
	pub links: Vec<TagLink>,
}

impl_view_model!(TagLinkList);

#[derive(Debug, Clone, Default)]
pub struct NavigationLinks {
	pub items: Vec<Link>,
}

impl_view_model!(NavigationLinks);

/// Node of the navigation tree used by sitemap views.
#[derive(Debug, Clone, Default)]
pub struct SitemapItem {
	pub title: String,
	pub url: String,
	pub item_type: Option<String>,
	pub items: Vec<SitemapItem>,
	pub visible: bool,
}

impl_view_model!(SitemapItem);

/// Ordered teasers rendered as tabs, carousels or accordions.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
	pub headline: Option<String>,
	pub items: Vec<Teaser>,
}

impl_view_model!(ItemList);

/// Query-driven teaser list with paging state.
#[derive(Debug, Clone, Default)]
pub struct ContentList {
	pub headline: Option<String>,
	pub page_size: u32,
	pub start: u32,
	pub has_more: bool,
	pub items: Vec<Teaser>,
}

impl_view_model!(ContentList);
