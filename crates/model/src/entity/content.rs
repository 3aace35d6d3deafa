use std::collections::BTreeMap;

use super::RichText;
use super::media::{Image, MediaItem};
use crate::{SCHEMA_ORG_VOCABULARY, SemanticEntity, SemanticProperty, impl_view_model};

#[derive(Debug, Clone, Default)]
pub struct Article {
	pub headline: String,
	pub image: Option<Image>,
	pub date: Option<String>,
	pub description: Option<String>,
	pub article_body: Vec<Paragraph>,
}

impl_view_model!(Article,
	entities: [SemanticEntity::public("Article", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [
		SemanticProperty::new("headline", "s:headline"),
		SemanticProperty::new("image", "s:image"),
		SemanticProperty::new("date", "s:dateCreated"),
		SemanticProperty::new("description", "s:about"),
		SemanticProperty::new("article_body", "s:articleBody"),
	],
);

/// Body section of an [`Article`].
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
	pub subheading: Option<String>,
	pub content: Option<RichText>,
	pub media: Option<MediaItem>,
	pub caption: Option<String>,
}

impl_view_model!(Paragraph);

#[derive(Debug, Clone, Default)]
pub struct Teaser {
	pub headline: Option<String>,
	pub media: Option<MediaItem>,
	pub text: Option<RichText>,
	pub date: Option<String>,
	pub link_url: Option<String>,
}

impl_view_model!(Teaser,
	entities: [SemanticEntity::public("Thing", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [
		SemanticProperty::new("headline", "s:name"),
		SemanticProperty::new("text", "s:description"),
	],
);

#[derive(Debug, Clone, Default)]
pub struct Place {
	pub name: String,
	pub image: Option<Image>,
	pub address: Option<String>,
	pub telephone: Option<String>,
	pub fax_number: Option<String>,
	pub email: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

impl_view_model!(Place,
	entities: [SemanticEntity::public("Place", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [
		SemanticProperty::new("name", "s:name"),
		SemanticProperty::new("image", "s:image"),
		SemanticProperty::new("address", "s:address"),
		SemanticProperty::new("telephone", "s:telephone"),
		SemanticProperty::new("fax_number", "s:faxNumber"),
		SemanticProperty::new("email", "s:email"),
	],
);

/// Cookie or old-browser notification bar content.
#[derive(Debug, Clone, Default)]
pub struct Notification {
	pub headline: Option<String>,
	pub text: Option<String>,
	pub continue_text: Option<String>,
	pub link_url: Option<String>,
}

impl_view_model!(Notification);

/// Free-form key/value settings consumed by a view.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
	pub settings: BTreeMap<String, String>,
}

impl_view_model!(Configuration);
