use serde::{Deserialize, Serialize};

/// Stored attributes of one embed block, as saved by the editor.
///
/// The markup producers (`render::render_block` on the server and the
/// `YoutubeBlock` component in the frontend) turn this into the placeholder
/// markup that the activation controller later reads back through data
/// attributes. Every field is optional on the wire; missing fields take their
/// default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockAttributes {
    /// A YouTube URL or a bare 11-character video id.
    pub url: String,
    /// Optional caption rendered below the player.
    pub caption: String,
    /// Use the `maxresdefault` thumbnail instead of `hqdefault`.
    pub is_max_res_thumbnail: bool,
    /// Aspect ratio such as `16/9`, `4/3` or `1.5`. Empty means the stylesheet default.
    pub aspect_ratio: String,
    /// URL of an image replacing the YouTube thumbnail.
    pub custom_thumbnail: String,
    pub settings: EmbedSettings,
}

/// Selects which extra videos play after the main one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultipleMode {
    #[default]
    #[serde(rename = "")]
    Single,
    /// `settings.video_ids` is appended to the main id as a `playlist` parameter.
    #[serde(rename = "multiple")]
    Multiple,
    /// `settings.playlist_id` is passed as a `list` parameter.
    #[serde(rename = "playlist")]
    Playlist,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedSettings {
    pub multiple_mode: MultipleMode,
    /// Comma separated list of extra video ids.
    pub video_ids: String,
    pub playlist_id: String,
    /// `1` loops playback.
    #[serde(rename = "loop")]
    pub looping: u8,
    /// `0` limits related videos to the same channel.
    pub rel: u8,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            multiple_mode: MultipleMode::Single,
            video_ids: String::new(),
            playlist_id: String::new(),
            looping: 0,
            rel: 1,
        }
    }
}
