//! Browser implementation of the activation `Host`.
//!
//! Event listeners and observer callbacks are leaked with `Closure::forget`:
//! placeholders live as long as the page and nothing ever tears them down.

use futures_util::future::{FutureExt, LocalBoxFuture};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlElement, HtmlIFrameElement, HtmlScriptElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use common::model::markup::PLAYER_API_SRC;

use crate::activation::{ActivationError, ClientInfo, EmbedFrame, Host, Observation, PlayerSpec};

#[derive(Clone, Copy, Debug, Default)]
pub struct DomHost;

fn document() -> Result<Document, ActivationError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ActivationError::MissingDocument)
}

/// `window.YT`, if the player API script has run.
fn yt_namespace() -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("YT"))
        .ok()
        .filter(|yt| yt.is_object())
}

fn yt_member(name: &str) -> Result<Function, ActivationError> {
    let yt = yt_namespace().ok_or_else(|| ActivationError::ScriptLoad("YT is undefined".into()))?;
    Reflect::get(&yt, &JsValue::from_str(name))
        .map_err(ActivationError::script_load)?
        .dyn_into::<Function>()
        .map_err(|_| ActivationError::ScriptLoad(format!("YT.{} is not a function", name)))
}

impl Host for DomHost {
    type Element = HtmlElement;
    type Frame = HtmlIFrameElement;

    fn client_info(&self) -> ClientInfo {
        match web_sys::window() {
            Some(window) => {
                let navigator = window.navigator();
                let vendor = Reflect::get(&navigator, &JsValue::from_str("vendor"))
                    .ok()
                    .and_then(|vendor| vendor.as_string())
                    .unwrap_or_default();
                ClientInfo::new(navigator.user_agent().unwrap_or_default(), vendor)
            }
            None => ClientInfo::default(),
        }
    }

    fn data_attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &HtmlElement, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &HtmlElement, class: &str) {
        element.class_list().add_1(class).ok();
    }

    fn on_click(&self, element: &HtmlElement, handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(handler);
        if let Err(error) =
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for clicks: {}", ActivationError::dom(error));
        }
        closure.forget();
    }

    fn observe_intersection(
        &self,
        element: &HtmlElement,
        mut handler: Box<dyn FnMut(bool) -> Observation>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if handler(entry.is_intersecting()) == Observation::Stop {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer.observe(element),
            Err(error) => log::warn!(
                "could not observe placeholder visibility: {}",
                ActivationError::dom(error)
            ),
        }
        callback.forget();
    }

    fn append_iframe(
        &self,
        element: &HtmlElement,
        frame: &EmbedFrame,
    ) -> Result<HtmlIFrameElement, ActivationError> {
        let iframe: HtmlIFrameElement = document()?
            .create_element("iframe")
            .map_err(ActivationError::dom)?
            .unchecked_into();

        iframe.set_width(&frame.width.to_string());
        iframe.set_height(&frame.height.to_string());
        iframe.set_title(&frame.title);
        iframe
            .set_attribute("allow", frame.allow)
            .map_err(ActivationError::dom)?;
        iframe.set_allow_fullscreen(frame.allow_fullscreen);
        iframe.set_src(&frame.src);

        element.append_child(&iframe).map_err(ActivationError::dom)?;
        Ok(iframe)
    }

    fn focus(&self, frame: &HtmlIFrameElement) {
        frame.focus().ok();
    }

    fn player_api_ready(&self) -> bool {
        yt_namespace()
            .and_then(|yt| Reflect::get(&yt, &JsValue::from_str("Player")).ok())
            .is_some_and(|player| player.is_function())
    }

    fn load_player_api(&self) -> LocalBoxFuture<'static, Result<(), ActivationError>> {
        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            if let Err(error) = inject_player_script(resolve, reject.clone()) {
                reject
                    .call1(&JsValue::NULL, &JsValue::from_str(&error.to_string()))
                    .ok();
            }
        });

        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(ActivationError::script_load)
        }
        .boxed_local()
    }

    fn create_player(
        &self,
        element: &HtmlElement,
        player: &PlayerSpec,
    ) -> Result<(), ActivationError> {
        let container = document()?
            .create_element("div")
            .map_err(ActivationError::dom)?;
        element
            .append_child(&container)
            .map_err(ActivationError::dom)?;

        let constructor = yt_member("Player")?;
        let options = player_options(player)?;
        let arguments = js_sys::Array::of2(&container, &options);
        Reflect::construct(&constructor, &arguments).map_err(ActivationError::dom)?;
        Ok(())
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Appends the player API script; `resolve` runs once `YT.ready` fires.
fn inject_player_script(resolve: Function, reject: Function) -> Result<(), ActivationError> {
    let document = document()?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(ActivationError::dom)?
        .unchecked_into();
    script.set_src(PLAYER_API_SRC);
    script.set_async(true);

    let on_error = reject.clone();
    let on_load = Closure::once_into_js(move || {
        let ready = yt_member("ready").and_then(|ready| {
            ready
                .call1(&JsValue::NULL, &resolve)
                .map_err(ActivationError::script_load)
        });
        if let Err(error) = ready {
            reject
                .call1(&JsValue::NULL, &JsValue::from_str(&error.to_string()))
                .ok();
        }
    });
    script.set_onload(Some(on_load.unchecked_ref()));
    script.set_onerror(Some(&on_error));

    let parent = match document.head() {
        Some(head) => head.unchecked_into::<web_sys::Node>(),
        None => document
            .body()
            .ok_or(ActivationError::MissingDocument)?
            .unchecked_into(),
    };
    parent.append_child(&script).map_err(ActivationError::dom)?;
    Ok(())
}

/// `{width, videoId, playerVars, events: {onReady}}` for `new YT.Player`.
fn player_options(player: &PlayerSpec) -> Result<JsValue, ActivationError> {
    let player_vars = Object::new();
    for (key, value) in player.player_vars.iter() {
        set(&player_vars, key, &JsValue::from_str(&value.to_string()))?;
    }

    let on_ready = Closure::<dyn FnMut(JsValue)>::new(|event: JsValue| {
        let Ok(target) = Reflect::get(&event, &JsValue::from_str("target")) else {
            return;
        };
        let play = Reflect::get(&target, &JsValue::from_str("playVideo"))
            .ok()
            .and_then(|play| play.dyn_into::<Function>().ok());
        if let Some(play) = play {
            play.call0(&target).ok();
        }
    });
    let events = Object::new();
    set(&events, "onReady", on_ready.as_ref())?;
    on_ready.forget();

    let options = Object::new();
    set(&options, "width", &JsValue::from_str(player.width))?;
    set(&options, "videoId", &JsValue::from_str(&player.video_id))?;
    set(&options, "playerVars", &player_vars)?;
    set(&options, "events", &events)?;
    Ok(options.into())
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), ActivationError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(ActivationError::dom)
}
