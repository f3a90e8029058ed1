use actix_web::{web, HttpResponse, Responder};
use common::model::block::BlockAttributes;
use common::render::{add_force_iframe_class, render_block};
use log::{info, warn};

use crate::config::Config;

/// Actix handler for `POST /api/blocks/render`.
///
/// # Returns
/// - `200 OK` with the block HTML on success.
/// - `400 Bad Request` with an error message if the URL holds no video id.
pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<BlockAttributes>,
) -> impl Responder {
    match render(&config, &payload) {
        Ok(html) => {
            info!("rendered block for {}", payload.url);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }
        Err(e) => {
            warn!("refused to render block: {}", e);
            HttpResponse::BadRequest().body(format!("Error rendering block: {}", e))
        }
    }
}

/// Renders `attributes`, applying the force-iframe marker if configured.
pub fn render(config: &Config, attributes: &BlockAttributes) -> Result<String, String> {
    let html = render_block(attributes).map_err(|e| e.to_string())?;
    if config.force_iframe_on_unsupported_browsers {
        Ok(add_force_iframe_class(&html))
    } else {
        Ok(html)
    }
}
