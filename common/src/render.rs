//! Server-side markup producer.
//!
//! Renders the same placeholder markup the block editor saves, so content that
//! was stored in another shape (a generic embed block, a shortcode, a theme
//! template call) can be served as a lazy block.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::codec::{aspect_ratio_style, video_id};
use crate::model::block::BlockAttributes;
use crate::model::markup::{
    BLOCK_CLASS, CAPTION_CLASS, DEFAULT_TITLE, FORCE_IFRAME_CLASS, PLAY_BUTTON_CLASS,
    PLAYER_CLASS, VISUALLY_HIDDEN_CLASS, placeholder_dom_id, thumbnail_url,
};
use crate::model::params::PlaybackParams;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no YouTube video id could be found in {0:?}")]
    MissingVideoId(String),
}

static FIRST_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*<[a-zA-Z][^>]*?)(\s*/?>)").expect("valid opening tag pattern")
});

static CLASS_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sclass="([^"]*)""#).expect("valid class pattern"));

/// Renders one block as a `<figure>` wrapping the click-to-load placeholder.
pub fn render_block(attributes: &BlockAttributes) -> Result<String, RenderError> {
    let video_id = video_id(&attributes.url)
        .ok_or_else(|| RenderError::MissingVideoId(attributes.url.clone()))?;
    let escaped_id = escape_html(&video_id);

    let style = aspect_ratio_style(&attributes.aspect_ratio)
        .map(|style| format!(" style=\"{}\"", escape_html(&style)))
        .unwrap_or_default();

    let params = PlaybackParams::from_settings(&video_id, &attributes.settings);
    let data_params = if params.is_empty() {
        String::new()
    } else {
        format!(" data-params=\"{}\"", escape_html(&params.to_json()))
    };

    let thumbnail = thumbnail_url(
        &video_id,
        attributes.is_max_res_thumbnail,
        &attributes.custom_thumbnail,
    );

    let caption = if attributes.caption.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<figcaption class=\"{}\">{}</figcaption>",
            CAPTION_CLASS,
            escape_html(&attributes.caption)
        )
    };

    Ok(format!(
        concat!(
            "<figure class=\"{block}\"{style}>",
            "<div id=\"{dom_id}\" class=\"{player}\" data-video-id=\"{id}\" data-title=\"{title}\"{params}",
            " style=\"background-image:url({thumbnail})\">",
            "<button type=\"button\" class=\"{button}\"><span class=\"{hidden}\">{title}</span></button>",
            "</div>{caption}</figure>"
        ),
        block = BLOCK_CLASS,
        style = style,
        dom_id = placeholder_dom_id(&escaped_id),
        player = PLAYER_CLASS,
        id = escaped_id,
        title = DEFAULT_TITLE,
        params = data_params,
        thumbnail = escape_html(&thumbnail),
        button = PLAY_BUTTON_CLASS,
        hidden = VISUALLY_HIDDEN_CLASS,
        caption = caption,
    ))
}

/// Adds the forced-iframe marker class to the first tag of `html`.
///
/// Markup without an opening tag is returned unchanged.
pub fn add_force_iframe_class(html: &str) -> String {
    let Some(tag) = FIRST_TAG.captures(html) else {
        return html.to_string();
    };
    let (Some(whole), Some(head), Some(close)) = (tag.get(0), tag.get(1), tag.get(2)) else {
        return html.to_string();
    };

    let head = head.as_str();
    let new_head = match CLASS_ATTRIBUTE.captures(head).and_then(|c| c.get(1)) {
        Some(classes) => {
            if classes
                .as_str()
                .split_whitespace()
                .any(|class| class == FORCE_IFRAME_CLASS)
            {
                return html.to_string();
            }
            let joined = if classes.as_str().trim().is_empty() {
                FORCE_IFRAME_CLASS.to_string()
            } else {
                format!("{} {}", classes.as_str(), FORCE_IFRAME_CLASS)
            };
            format!(
                "{}{}{}",
                &head[..classes.start()],
                joined,
                &head[classes.end()..]
            )
        }
        None => format!("{} class=\"{}\"", head, FORCE_IFRAME_CLASS),
    };

    format!("{}{}{}", new_head, close.as_str(), &html[whole.end()..])
}

/// Escapes text for use in element content and double- or single-quoted attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
