//! Conversion between this block and the generic embed block.
//!
//! Only the URL and caption survive the trip in either direction; the lazy
//! block's thumbnail and playback settings have no generic counterpart.

use serde::{Deserialize, Serialize};

use crate::model::block::BlockAttributes;

/// Provider slug the generic embed block stores for YouTube URLs.
pub const YOUTUBE_PROVIDER: &str = "youtube";

const SHORT_URL_HOST: &str = "https://youtu.be/";

/// Attributes of the generic embed block relevant to YouTube content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedBlockAttributes {
    pub url: String,
    pub caption: String,
    pub provider_name_slug: String,
    pub responsive: bool,
}

impl EmbedBlockAttributes {
    pub fn is_youtube(&self) -> bool {
        self.provider_name_slug == YOUTUBE_PROVIDER
    }
}

/// Converts a generic embed into a lazy block. Non-YouTube embeds are refused.
pub fn from_embed(embed: &EmbedBlockAttributes) -> Option<BlockAttributes> {
    if !embed.is_youtube() {
        return None;
    }
    Some(BlockAttributes {
        url: embed.url.clone(),
        caption: embed.caption.clone(),
        ..BlockAttributes::default()
    })
}

/// Converts a lazy block back into a generic YouTube embed.
///
/// A bare 11-character id is expanded to a short URL since the generic block
/// only understands URLs.
pub fn to_embed(block: &BlockAttributes) -> EmbedBlockAttributes {
    let url = if block.url.chars().count() == 11 {
        format!("{}{}", SHORT_URL_HOST, block.url)
    } else {
        block.url.clone()
    };

    EmbedBlockAttributes {
        url,
        caption: block.caption.clone(),
        provider_name_slug: YOUTUBE_PROVIDER.to_string(),
        responsive: true,
    }
}
