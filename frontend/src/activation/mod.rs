//! Deferred activation of YouTube placeholders.
//!
//! The controller never touches the DOM directly: every side effect goes
//! through the `Host` trait, implemented for the browser in `crate::dom`.
//!
//! Submodules:
//! - `controller`: the per-placeholder state machine and both triggers.
//! - `host`: the capability trait the controller runs against.
//! - `player_api`: the page-wide, load-once JS Player API future.
//! - `policy`: user-agent heuristics choosing the strategy.
//! - `strategy`: iframe and player descriptions handed to the host.

mod controller;
mod error;
mod host;
mod player_api;
mod policy;
mod state;
mod strategy;

pub use controller::Controller;
pub use error::ActivationError;
pub use host::{Host, Observation};
pub use player_api::PlayerApiLoader;
pub use policy::{ClientInfo, ClientPolicy};
pub use strategy::{EmbedFrame, PlayerSpec};
