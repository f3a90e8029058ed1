use futures_util::future::LocalBoxFuture;

use super::error::ActivationError;
use super::policy::ClientInfo;
use super::strategy::{EmbedFrame, PlayerSpec};

/// Whether an intersection observer keeps watching after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

/// Everything the activation controller needs from its environment.
///
/// The browser implementation lives in `crate::dom`; tests drive the
/// controller through an in-memory fake that records every call.
pub trait Host: Clone + 'static {
    /// Placeholder element handle.
    type Element: Clone + 'static;
    /// Handle of an iframe appended by the native strategy.
    type Frame;

    fn client_info(&self) -> ClientInfo;

    fn data_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    /// Registers `handler` for every click on `element`, for the page's lifetime.
    fn on_click(&self, element: &Self::Element, handler: Box<dyn FnMut()>);

    /// Calls `handler` with the intersecting flag of each viewport change
    /// until it returns `Observation::Stop`.
    fn observe_intersection(
        &self,
        element: &Self::Element,
        handler: Box<dyn FnMut(bool) -> Observation>,
    );

    fn append_iframe(
        &self,
        element: &Self::Element,
        frame: &EmbedFrame,
    ) -> Result<Self::Frame, ActivationError>;

    fn focus(&self, frame: &Self::Frame);

    /// True when the player API is already present on the page.
    fn player_api_ready(&self) -> bool;

    /// Injects the player API script and resolves once the API reports ready.
    fn load_player_api(&self) -> LocalBoxFuture<'static, Result<(), ActivationError>>;

    /// Appends a fresh container to `element` and builds a player in it that
    /// starts playing as soon as it is ready.
    fn create_player(
        &self,
        element: &Self::Element,
        player: &PlayerSpec,
    ) -> Result<(), ActivationError>;

    /// Runs `task` on the page's event loop.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
