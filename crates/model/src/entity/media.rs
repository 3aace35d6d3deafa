use crate::{SCHEMA_ORG_VOCABULARY, SemanticEntity, SemanticProperty, impl_view_model};

/// Binary content reference shared by all media entities.
#[derive(Debug, Clone, Default)]
pub struct MediaItem {
	pub url: String,
	pub file_name: Option<String>,
	pub file_size: u64,
	pub mime_type: Option<String>,
}

impl_view_model!(MediaItem);

#[derive(Debug, Clone, Default)]
pub struct Image {
	pub media: MediaItem,
	pub alternate_text: Option<String>,
}

impl_view_model!(Image,
	entities: [SemanticEntity::public("ImageObject", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [SemanticProperty::new("alternate_text", "s:alternateName")],
);

#[derive(Debug, Clone, Default)]
pub struct Download {
	pub media: MediaItem,
	pub description: Option<String>,
}

impl_view_model!(Download,
	entities: [SemanticEntity::public("DataDownload", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [SemanticProperty::new("description", "s:description")],
);

#[derive(Debug, Clone, Default)]
pub struct YouTubeVideo {
	pub media: MediaItem,
	pub headline: Option<String>,
	pub youtube_id: String,
	pub width: u32,
	pub height: u32,
}

impl_view_model!(YouTubeVideo,
	entities: [SemanticEntity::public("VideoObject", SCHEMA_ORG_VOCABULARY, "s")],
	properties: [SemanticProperty::new("headline", "s:name")],
);
