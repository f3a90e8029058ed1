//! # Block Rendering Service
//!
//! Server-side rendering of the lazy YouTube block, for content that does not
//! carry the placeholder markup itself.
//!
//! ## Sub-modules:
//! - `render`: renders stored block attributes into placeholder markup.
//! - `embed`: serves YouTube embeds of the generic embed block as lazy blocks.

mod embed;
mod render;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all block rendering endpoints.
const API_PATH: &str = "/api/blocks";

/// Configures and returns the Actix `Scope` for block rendering routes.
///
/// # Registered Routes:
///
/// *   **`POST /render`**:
///     - **Handler**: `render::process`
///     - **Description**: Takes a JSON `BlockAttributes` payload and answers with the
///       block's HTML. The force-iframe marker is added when the server is configured
///       for it. Answers `400 Bad Request` when no video id can be found in the URL.
///
/// *   **`POST /embed`**:
///     - **Handler**: `embed::process`
///     - **Description**: Takes a rendered generic embed block (`attrs` plus `content`).
///       YouTube embeds are re-rendered as lazy blocks when speeding up videos is enabled;
///       anything else comes back untouched.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/render", post().to(render::process))
        .route("/embed", post().to(embed::process))
}
