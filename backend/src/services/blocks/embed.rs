//! Re-renders YouTube embeds of the generic embed block as lazy blocks.
//!
//! Sites that already embed videos with the generic block can opt in through
//! `BYEB_SPEED_UP_YOUTUBE_VIDEOS` instead of converting every post.

use actix_web::{web, HttpResponse, Responder};
use common::transforms::{from_embed, EmbedBlockAttributes};
use log::info;
use serde::Deserialize;

use super::render::render;
use crate::config::Config;

/// A generic embed block as the host renders it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedRenderRequest {
    pub block_name: String,
    pub attrs: EmbedBlockAttributes,
    /// HTML the generic block rendered on its own.
    pub content: String,
}

/// Actix handler for `POST /api/blocks/embed`. Always answers `200 OK`.
pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<EmbedRenderRequest>,
) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_embed(&config, &payload))
}

/// Lazy block markup for a YouTube embed, or the original content otherwise.
///
/// A YouTube embed whose URL holds no video id renders as an empty string.
pub fn render_embed(config: &Config, request: &EmbedRenderRequest) -> String {
    if !config.speed_up_youtube_videos {
        return request.content.clone();
    }
    let Some(attributes) = from_embed(&request.attrs) else {
        return request.content.clone();
    };

    info!(
        "serving {} from {} as a lazy YouTube block",
        attributes.url, request.block_name
    );
    render(config, &attributes).unwrap_or_default()
}
