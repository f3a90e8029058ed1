//! Page-wide, load-once access to the YouTube JS Player API.

use futures_util::future::{self, FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::rc::Rc;

use super::error::ActivationError;
use super::host::Host;

pub type PlayerApiLoad = Shared<LocalBoxFuture<'static, Result<(), ActivationError>>>;

thread_local! {
    static PAGE_LOADER: PlayerApiLoader = PlayerApiLoader::default();
}

/// Memoized script load shared by every controller of a page.
///
/// The first caller starts the load; every later caller receives a clone of
/// the same future and observes the same outcome. A failed load is kept as
/// is and never retried.
#[derive(Clone, Default)]
pub struct PlayerApiLoader {
    load: Rc<RefCell<Option<PlayerApiLoad>>>,
}

impl PlayerApiLoader {
    /// Loader shared by the whole page.
    pub fn page() -> Self {
        PAGE_LOADER.with(Clone::clone)
    }

    pub fn ensure_loaded<H: Host>(&self, host: &H) -> PlayerApiLoad {
        if let Some(load) = self.load.borrow().as_ref() {
            return load.clone();
        }

        let load = if host.player_api_ready() {
            future::ready(Ok(())).boxed_local().shared()
        } else {
            log::debug!("loading the YouTube player API");
            host.load_player_api().shared()
        };
        *self.load.borrow_mut() = Some(load.clone());
        load
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.load.borrow().is_some()
    }
}
