//! What each activation strategy asks the host to build.

use common::model::params::{embed_src, PlaybackParams};

pub const FRAME_WIDTH: u32 = 560;
pub const FRAME_HEIGHT: u32 = 315;
pub const FRAME_PERMISSIONS: &str =
    "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

/// Native iframe pointed at the privacy-enhanced embed host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
}

impl EmbedFrame {
    pub fn new(video_id: &str, title: &str, params: &PlaybackParams) -> Self {
        Self {
            src: embed_src(video_id, params),
            title: title.to_string(),
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            allow: FRAME_PERMISSIONS,
            allow_fullscreen: true,
        }
    }
}

/// Options for `new YT.Player(container, {...})`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub video_id: String,
    pub width: &'static str,
    pub player_vars: PlaybackParams,
}

impl PlayerSpec {
    pub fn new(video_id: &str, player_vars: PlaybackParams) -> Self {
        Self {
            video_id: video_id.to_string(),
            width: "100%",
            player_vars,
        }
    }
}
