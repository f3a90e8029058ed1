//! Names shared by the markup producers and the activation controller.
//!
//! The server renders placeholders with these classes and data attributes and
//! the browser side binds to them, so changing any value here is a breaking
//! change for content already saved in posts.

/// Class of the block wrapper (`<figure>`).
pub const BLOCK_CLASS: &str = "wp-block-boldblocks-youtube-block";

/// Class of the placeholder element a controller binds to.
pub const PLAYER_CLASS: &str = "yb-player";

/// Class on the wrapper requesting forced-iframe mode for its placeholder.
pub const FORCE_IFRAME_CLASS: &str = "force-iframe";

/// Class added to a placeholder once it has been activated.
pub const ACTIVATED_CLASS: &str = "is-activated";

pub const PLAY_BUTTON_CLASS: &str = "yb-btn-play";
pub const CAPTION_CLASS: &str = "yb-caption";
pub const VISUALLY_HIDDEN_CLASS: &str = "visually-hidden";

pub const DATA_VIDEO_ID: &str = "data-video-id";
pub const DATA_TITLE: &str = "data-title";
pub const DATA_PARAMS: &str = "data-params";

/// Label of the play affordance and fallback iframe title.
pub const DEFAULT_TITLE: &str = "Play";

/// CSS custom property carrying the padding-top percentage of the wrapper.
pub const ASPECT_RATIO_PROPERTY: &str = "--byeb--aspect-ratio";

/// Privacy-enhanced embed host used by the native iframe strategy.
pub const EMBED_HOST: &str = "https://www.youtube-nocookie.com/embed/";

/// YouTube IFrame Player API script.
pub const PLAYER_API_SRC: &str = "https://www.youtube.com/iframe_api";

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi/";

/// CSS selector matching every placeholder on a page.
pub fn player_selector() -> String {
    format!(".{} .{}", BLOCK_CLASS, PLAYER_CLASS)
}

/// DOM id of the placeholder for `video_id`.
pub fn placeholder_dom_id(video_id: &str) -> String {
    format!("yb-video-{}", video_id)
}

/// Thumbnail shown behind the play button.
///
/// A non-empty `custom_thumbnail` always wins over the YouTube image.
pub fn thumbnail_url(video_id: &str, max_res: bool, custom_thumbnail: &str) -> String {
    if !custom_thumbnail.is_empty() {
        return custom_thumbnail.to_string();
    }
    let image = if max_res { "maxresdefault" } else { "hqdefault" };
    format!("{}{}/{}.jpg", THUMBNAIL_HOST, video_id, image)
}
