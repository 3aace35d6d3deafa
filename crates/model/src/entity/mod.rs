//! Entity models of the core module.
//!
//! These are plain data carriers. Their semantic tables mirror the schema.org
//! mappings the core views rely on.

mod content;
mod links;
mod media;

pub use content::{Article, Configuration, Notification, Paragraph, Place, Teaser};
pub use links::{ContentList, ItemList, Link, LinkList, NavigationLinks, SitemapItem, TagLink, TagLinkList};
pub use media::{Download, Image, MediaItem, YouTubeVideo};

/// Rich text fragment as authored in the CMS.
pub type RichText = String;
