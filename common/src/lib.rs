//! Shared model for the lazy YouTube embed block.
//!
//! Both the wasm frontend (which activates placeholders in the browser) and the
//! backend (which renders block markup on the server) depend on this crate, so
//! everything that defines the markup contract between them lives here.

pub mod codec;
pub mod model;
pub mod render;
pub mod transforms;
