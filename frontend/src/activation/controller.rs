//! Turns one dormant placeholder into a playing video.
//!
//! A controller binds to a single placeholder for the lifetime of the page. It
//! always listens for clicks and, in forced-iframe mode, also watches the
//! placeholder enter the viewport. Whichever fires first activates the
//! placeholder; every later trigger is ignored.

use futures_util::future::FutureExt;
use std::rc::Rc;

use common::model::markup::{ACTIVATED_CLASS, DATA_PARAMS, DATA_TITLE, DATA_VIDEO_ID, DEFAULT_TITLE};
use common::model::params::PlaybackParams;

use super::error::ActivationError;
use super::host::{Host, Observation};
use super::player_api::{PlayerApiLoad, PlayerApiLoader};
use super::policy::ClientPolicy;
use super::state::ActivationCell;
#[cfg(test)]
use super::state::ActivationState;
use super::strategy::{EmbedFrame, PlayerSpec};

pub struct Controller<H: Host> {
    inner: Option<Rc<Inner<H>>>,
}

struct Inner<H: Host> {
    host: H,
    element: H::Element,
    video_id: String,
    needs_scripted_player: bool,
    force_iframe_mode: bool,
    state: ActivationCell,
    loader: PlayerApiLoader,
}

impl<H: Host> Controller<H> {
    /// Binds a controller to `element`.
    ///
    /// An element without a `data-video-id` gets an inert controller: no
    /// listener and no observer are registered.
    pub fn attach(
        host: H,
        element: H::Element,
        force_iframe: bool,
        policy: &ClientPolicy,
        loader: PlayerApiLoader,
    ) -> Self {
        let Some(video_id) = host
            .data_attribute(&element, DATA_VIDEO_ID)
            .filter(|id| !id.is_empty())
        else {
            log::debug!("placeholder without a video id left inert");
            return Self { inner: None };
        };

        let client = host.client_info();
        let inner = Rc::new(Inner {
            needs_scripted_player: policy.needs_scripted_player(&client),
            force_iframe_mode: policy.should_force_iframe(force_iframe, &client),
            host,
            element,
            video_id,
            state: ActivationCell::default(),
            loader,
        });

        if inner.force_iframe_mode {
            let observed = Rc::clone(&inner);
            inner.host.observe_intersection(
                &inner.element,
                Box::new(move |intersecting| observed.on_intersection(intersecting)),
            );
        }

        let clicked = Rc::clone(&inner);
        inner
            .host
            .on_click(&inner.element, Box::new(move || clicked.on_click()));

        Self { inner: Some(inner) }
    }

    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    #[cfg(test)]
    pub fn video_id(&self) -> Option<&str> {
        self.inner.as_ref().map(|inner| inner.video_id.as_str())
    }

    #[cfg(test)]
    pub fn state(&self) -> ActivationState {
        self.inner
            .as_ref()
            .map_or(ActivationState::Dormant, |inner| inner.state.get())
    }
}

impl<H: Host> Inner<H> {
    fn try_activate(&self) -> bool {
        // Another controller bound to the same element already activated it.
        if self.host.has_class(&self.element, ACTIVATED_CLASS) {
            self.state.try_activate();
            return false;
        }
        if !self.state.try_activate() {
            return false;
        }
        self.host.add_class(&self.element, ACTIVATED_CLASS);
        true
    }

    fn on_intersection(&self, intersecting: bool) -> Observation {
        if !intersecting {
            return Observation::Continue;
        }
        if self.try_activate() {
            log::debug!("video {} visible, preparing iframe", self.video_id);
            if let Err(error) = self.insert_iframe(&self.playback_params()) {
                log::warn!("could not prepare video {}: {}", self.video_id, error);
            }
        }
        Observation::Stop
    }

    fn on_click(self: &Rc<Self>) {
        if !self.try_activate() {
            return;
        }
        let params = self.playback_params();

        if self.needs_scripted_player {
            log::debug!("video {} starts through the player API", self.video_id);
            let load = self.loader.ensure_loaded(&self.host);
            let this = Rc::clone(self);
            self.host
                .spawn_local(async move { this.play_scripted(load, params).await }.boxed_local());
        } else {
            match self.insert_iframe(&params) {
                Ok(frame) => self.host.focus(&frame),
                Err(error) => log::warn!("could not start video {}: {}", self.video_id, error),
            }
        }
    }

    async fn play_scripted(self: Rc<Self>, load: PlayerApiLoad, params: PlaybackParams) {
        if let Err(error) = load.await {
            log::warn!("video {} will not play: {}", self.video_id, error);
            return;
        }
        let player = PlayerSpec::new(&self.video_id, params);
        if let Err(error) = self.host.create_player(&self.element, &player) {
            log::warn!("could not create player for {}: {}", self.video_id, error);
        }
    }

    fn insert_iframe(&self, params: &PlaybackParams) -> Result<H::Frame, ActivationError> {
        let title = self
            .host
            .data_attribute(&self.element, DATA_TITLE)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let frame = EmbedFrame::new(&self.video_id, &title, params);
        self.host.append_iframe(&self.element, &frame)
    }

    fn playback_params(&self) -> PlaybackParams {
        let raw = self.host.data_attribute(&self.element, DATA_PARAMS);
        PlaybackParams::from_data_attribute(raw.as_deref()).for_playback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::policy::ClientInfo;
    use common::model::params::ParamValue;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, LocalSpawner};
    use futures::task::LocalSpawnExt;
    use futures_util::future::LocalBoxFuture;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

    #[derive(Default)]
    struct FakeElement {
        attributes: HashMap<String, String>,
        classes: Vec<String>,
        frames: Vec<EmbedFrame>,
        players: Vec<PlayerSpec>,
    }

    #[derive(Default)]
    struct Page {
        client: ClientInfo,
        elements: RefCell<Vec<FakeElement>>,
        click_handlers: RefCell<Vec<(usize, Box<dyn FnMut()>)>>,
        observers: RefCell<HashMap<usize, Box<dyn FnMut(bool) -> Observation>>>,
        focused: RefCell<Vec<usize>>,
        frame_count: Cell<usize>,
        api_ready: Cell<bool>,
        script_requests: Cell<usize>,
        pending_script: RefCell<Option<oneshot::Sender<Result<(), ActivationError>>>>,
    }

    #[derive(Clone)]
    struct FakeHost {
        page: Rc<Page>,
        spawner: LocalSpawner,
    }

    impl FakeHost {
        fn new(spawner: LocalSpawner, user_agent: &str) -> Self {
            let page = Page {
                client: ClientInfo::new(user_agent, "Google Inc."),
                ..Page::default()
            };
            Self {
                page: Rc::new(page),
                spawner,
            }
        }

        fn add_element(&self, attributes: &[(&str, &str)]) -> usize {
            let mut elements = self.page.elements.borrow_mut();
            elements.push(FakeElement {
                attributes: attributes
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
                ..FakeElement::default()
            });
            elements.len() - 1
        }

        fn click(&self, element: usize) {
            for (target, handler) in self.page.click_handlers.borrow_mut().iter_mut() {
                if *target == element {
                    handler();
                }
            }
        }

        fn intersect(&self, element: usize, intersecting: bool) {
            let mut observers = self.page.observers.borrow_mut();
            let Some(handler) = observers.get_mut(&element) else {
                return;
            };
            if handler(intersecting) == Observation::Stop {
                observers.remove(&element);
            }
        }

        fn finish_script_load(&self, result: Result<(), ActivationError>) {
            let sender = self.page.pending_script.borrow_mut().take();
            sender.expect("no script load pending").send(result).unwrap();
        }

        fn listener_count(&self, element: usize) -> usize {
            let handlers = self.page.click_handlers.borrow();
            handlers.iter().filter(|(target, _)| *target == element).count()
        }

        fn is_observed(&self, element: usize) -> bool {
            self.page.observers.borrow().contains_key(&element)
        }

        fn frames(&self, element: usize) -> Vec<EmbedFrame> {
            self.page.elements.borrow()[element].frames.clone()
        }

        fn players(&self, element: usize) -> Vec<PlayerSpec> {
            self.page.elements.borrow()[element].players.clone()
        }
    }

    impl Host for FakeHost {
        type Element = usize;
        type Frame = usize;

        fn client_info(&self) -> ClientInfo {
            self.page.client.clone()
        }

        fn data_attribute(&self, element: &usize, name: &str) -> Option<String> {
            self.page.elements.borrow()[*element]
                .attributes
                .get(name)
                .cloned()
        }

        fn has_class(&self, element: &usize, class: &str) -> bool {
            self.page.elements.borrow()[*element]
                .classes
                .iter()
                .any(|existing| existing == class)
        }

        fn add_class(&self, element: &usize, class: &str) {
            self.page.elements.borrow_mut()[*element]
                .classes
                .push(class.to_string());
        }

        fn on_click(&self, element: &usize, handler: Box<dyn FnMut()>) {
            self.page
                .click_handlers
                .borrow_mut()
                .push((*element, handler));
        }

        fn observe_intersection(
            &self,
            element: &usize,
            handler: Box<dyn FnMut(bool) -> Observation>,
        ) {
            self.page.observers.borrow_mut().insert(*element, handler);
        }

        fn append_iframe(
            &self,
            element: &usize,
            frame: &EmbedFrame,
        ) -> Result<usize, ActivationError> {
            self.page.elements.borrow_mut()[*element]
                .frames
                .push(frame.clone());
            let id = self.page.frame_count.get();
            self.page.frame_count.set(id + 1);
            Ok(id)
        }

        fn focus(&self, frame: &usize) {
            self.page.focused.borrow_mut().push(*frame);
        }

        fn player_api_ready(&self) -> bool {
            self.page.api_ready.get()
        }

        fn load_player_api(&self) -> LocalBoxFuture<'static, Result<(), ActivationError>> {
            let (sender, receiver) = oneshot::channel();
            self.page
                .script_requests
                .set(self.page.script_requests.get() + 1);
            *self.page.pending_script.borrow_mut() = Some(sender);
            async move {
                receiver
                    .await
                    .unwrap_or_else(|_| Err(ActivationError::ScriptLoad("dropped".into())))
            }
            .boxed_local()
        }

        fn create_player(
            &self,
            element: &usize,
            player: &PlayerSpec,
        ) -> Result<(), ActivationError> {
            self.page.elements.borrow_mut()[*element]
                .players
                .push(player.clone());
            Ok(())
        }

        fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
            self.spawner.spawn_local(task).unwrap();
        }
    }

    fn attach(host: &FakeHost, element: usize, force_iframe: bool) -> Controller<FakeHost> {
        Controller::attach(
            host.clone(),
            element,
            force_iframe,
            &ClientPolicy::default(),
            PlayerApiLoader::default(),
        )
    }

    #[test]
    fn element_without_video_id_stays_inert() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), IPHONE);
        let missing = host.add_element(&[("data-title", "Play")]);
        let empty = host.add_element(&[("data-video-id", "")]);

        let first = attach(&host, missing, true);
        let second = attach(&host, empty, true);

        assert!(first.is_inert());
        assert!(second.is_inert());
        assert_eq!(host.listener_count(missing), 0);
        assert_eq!(host.listener_count(empty), 0);
        assert!(!host.is_observed(missing));
        host.click(missing);
        assert!(host.frames(missing).is_empty());
        assert_eq!(first.state(), ActivationState::Dormant);
    }

    #[test]
    fn click_inserts_one_focused_iframe() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), DESKTOP);
        let element = host.add_element(&[
            ("data-video-id", "dQw4w9WgXcQ"),
            ("data-params", r#"{"rel":0}"#),
        ]);
        let controller = attach(&host, element, false);

        host.click(element);

        let frames = host.frames(element);
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0].src,
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0&autoplay=1&playsinline=1"
        );
        assert_eq!(frames[0].title, "Play");
        assert_eq!(*host.page.focused.borrow(), vec![0]);
        assert!(host.has_class(&element, "is-activated"));
        assert_eq!(controller.state(), ActivationState::Activated);

        host.click(element);
        host.click(element);
        assert_eq!(host.frames(element).len(), 1);
        assert_eq!(host.page.focused.borrow().len(), 1);
    }

    #[test]
    fn author_params_cannot_disable_autoplay() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), DESKTOP);
        let element = host.add_element(&[
            ("data-video-id", "dQw4w9WgXcQ"),
            ("data-params", r#"{"autoplay":0}"#),
            ("data-title", "Watch the trailer"),
        ]);
        attach(&host, element, false);

        host.click(element);

        let frame = &host.frames(element)[0];
        assert!(frame.src.ends_with("?autoplay=1&playsinline=1"));
        assert!(!frame.src.contains("autoplay=0"));
        assert_eq!(frame.title, "Watch the trailer");
    }

    #[test]
    fn malformed_params_still_play() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), DESKTOP);
        let element = host.add_element(&[
            ("data-video-id", "dQw4w9WgXcQ"),
            ("data-params", "{not json"),
        ]);
        attach(&host, element, false);

        host.click(element);

        assert!(host.frames(element)[0]
            .src
            .ends_with("dQw4w9WgXcQ?autoplay=1&playsinline=1"));
    }

    #[test]
    fn scripted_player_loads_the_api_once() {
        let mut pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), ANDROID);
        let element = host.add_element(&[
            ("data-video-id", "dQw4w9WgXcQ"),
            ("data-params", r#"{"list":"PL1"}"#),
        ]);
        attach(&host, element, false);

        host.click(element);
        host.click(element);
        pool.run_until_stalled();

        assert_eq!(host.page.script_requests.get(), 1);
        assert!(host.players(element).is_empty());
        assert!(host.frames(element).is_empty());

        host.finish_script_load(Ok(()));
        pool.run_until_stalled();

        let players = host.players(element);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].video_id, "dQw4w9WgXcQ");
        assert_eq!(players[0].width, "100%");
        assert_eq!(
            players[0].player_vars.get("list"),
            Some(&ParamValue::Text("PL1".into()))
        );
        assert_eq!(
            players[0].player_vars.get("autoplay"),
            Some(&ParamValue::Number(1))
        );
        assert!(host.page.focused.borrow().is_empty());
    }

    #[test]
    fn controllers_share_one_script_load() {
        let mut pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), ANDROID);
        let loader = PlayerApiLoader::default();
        let first = host.add_element(&[("data-video-id", "aaaaaaaaaaa")]);
        let second = host.add_element(&[("data-video-id", "bbbbbbbbbbb")]);
        for element in [first, second] {
            Controller::attach(
                host.clone(),
                element,
                false,
                &ClientPolicy::default(),
                loader.clone(),
            );
        }

        host.click(first);
        host.click(second);
        pool.run_until_stalled();
        assert_eq!(host.page.script_requests.get(), 1);
        assert!(loader.is_started());

        host.finish_script_load(Ok(()));
        pool.run_until_stalled();

        assert_eq!(host.players(first).len(), 1);
        assert_eq!(host.players(second).len(), 1);
        assert_eq!(host.players(second)[0].video_id, "bbbbbbbbbbb");
    }

    #[test]
    fn present_api_is_not_loaded_again() {
        let mut pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), ANDROID);
        host.page.api_ready.set(true);
        let element = host.add_element(&[("data-video-id", "dQw4w9WgXcQ")]);
        attach(&host, element, false);

        host.click(element);
        pool.run_until_stalled();

        assert_eq!(host.page.script_requests.get(), 0);
        assert_eq!(host.players(element).len(), 1);
    }

    #[test]
    fn failed_script_load_degrades_silently() {
        let mut pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), ANDROID);
        let loader = PlayerApiLoader::default();
        let first = host.add_element(&[("data-video-id", "aaaaaaaaaaa")]);
        let later = host.add_element(&[("data-video-id", "bbbbbbbbbbb")]);
        let controller = Controller::attach(
            host.clone(),
            first,
            false,
            &ClientPolicy::default(),
            loader.clone(),
        );
        Controller::attach(host.clone(), later, false, &ClientPolicy::default(), loader);

        host.click(first);
        host.finish_script_load(Err(ActivationError::ScriptLoad("offline".into())));
        pool.run_until_stalled();

        assert!(host.players(first).is_empty());
        assert_eq!(controller.state(), ActivationState::Activated);

        host.click(first);
        host.click(later);
        pool.run_until_stalled();

        assert_eq!(host.page.script_requests.get(), 1);
        assert!(host.players(later).is_empty());
    }

    #[test]
    fn forced_iframe_prepares_video_once_visible() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), IPHONE);
        let element = host.add_element(&[("data-video-id", "dQw4w9WgXcQ")]);
        let controller = attach(&host, element, true);
        assert!(host.is_observed(element));

        host.intersect(element, false);
        assert!(host.frames(element).is_empty());
        assert!(host.is_observed(element));

        host.intersect(element, true);
        host.intersect(element, true);

        assert_eq!(host.frames(element).len(), 1);
        assert!(!host.is_observed(element));
        assert!(host.page.focused.borrow().is_empty());
        assert_eq!(controller.state(), ActivationState::Activated);

        host.click(element);
        assert_eq!(host.frames(element).len(), 1);
        assert_eq!(host.page.script_requests.get(), 0);
        assert!(host.players(element).is_empty());
    }

    #[test]
    fn forced_iframe_needs_a_matching_browser() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), ANDROID);
        let element = host.add_element(&[("data-video-id", "dQw4w9WgXcQ")]);

        attach(&host, element, true);

        assert!(!host.is_observed(element));
        assert_eq!(host.listener_count(element), 1);
    }

    #[test]
    fn click_before_visibility_wins_in_forced_mode() {
        let mut pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), IPHONE);
        let element = host.add_element(&[("data-video-id", "dQw4w9WgXcQ")]);
        attach(&host, element, true);

        host.click(element);
        host.intersect(element, true);

        assert!(host.frames(element).is_empty());
        assert!(!host.is_observed(element));
        assert_eq!(host.page.script_requests.get(), 1);

        host.finish_script_load(Ok(()));
        pool.run_until_stalled();
        assert_eq!(host.players(element).len(), 1);
    }

    #[test]
    fn second_binding_on_same_element_is_ignored() {
        let pool = LocalPool::new();
        let host = FakeHost::new(pool.spawner(), DESKTOP);
        let element = host.add_element(&[("data-video-id", "dQw4w9WgXcQ")]);
        let first = attach(&host, element, false);
        let second = attach(&host, element, false);

        host.click(element);

        assert_eq!(host.frames(element).len(), 1);
        assert_eq!(first.state(), ActivationState::Activated);
        assert_eq!(second.state(), ActivationState::Activated);
        assert_eq!(second.video_id(), Some("dQw4w9WgXcQ"));
    }
}
