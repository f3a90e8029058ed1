//! Binds controllers to the placeholders rendered by the server.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use common::model::markup::{player_selector, ACTIVATED_CLASS, FORCE_IFRAME_CLASS};

use crate::activation::{ClientPolicy, Controller, PlayerApiLoader};
use crate::app::ROOT_ID;
use crate::dom::DomHost;

/// Binds every placeholder once the document has been parsed.
pub fn install() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        bind_all(&document);
        return;
    }

    let ready_document = document.clone();
    let on_ready = Closure::once_into_js(move || {
        bind_all(&ready_document);
    });
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .is_err()
    {
        log::warn!("could not wait for DOMContentLoaded");
    }
}

/// Attaches a controller to each placeholder not activated yet and returns
/// how many were bound. Placeholders under the app root belong to
/// `YoutubeBlock` components and are skipped.
pub fn bind_all(document: &Document) -> usize {
    let Ok(placeholders) = document.query_selector_all(&player_selector()) else {
        return 0;
    };

    let policy = ClientPolicy::default();
    let app_root = format!("#{}", ROOT_ID);
    let mut bound = 0;
    for index in 0..placeholders.length() {
        let Some(element) = placeholders
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if element.class_list().contains(ACTIVATED_CLASS) {
            continue;
        }
        if matches!(element.closest(&app_root), Ok(Some(_))) {
            continue;
        }

        let force_iframe = element
            .parent_element()
            .is_some_and(|parent| parent.class_list().contains(FORCE_IFRAME_CLASS));
        let controller = Controller::attach(
            DomHost,
            element,
            force_iframe,
            &policy,
            PlayerApiLoader::page(),
        );
        if !controller.is_inert() {
            bound += 1;
        }
    }

    log::debug!("bound {} YouTube placeholders", bound);
    bound
}
