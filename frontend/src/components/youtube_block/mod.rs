//! Client-rendered lazy YouTube block.
//!
//! Renders the placeholder markup from stored block attributes and binds an
//! activation controller to it after the first render, so pages built in the
//! browser behave like server-rendered ones.

use web_sys::HtmlElement;
use yew::prelude::*;

mod props;
mod view;

pub use props::YoutubeBlockProps;

use crate::activation::{ClientPolicy, Controller, PlayerApiLoader};
use crate::dom::DomHost;

pub struct YoutubeBlock {
    /// Reference to the placeholder `<div>`.
    pub player_ref: NodeRef,
    /// Controller bound on first render; `None` until then.
    controller: Option<Controller<DomHost>>,
}

impl Component for YoutubeBlock {
    type Message = ();
    type Properties = YoutubeBlockProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            player_ref: NodeRef::default(),
            controller: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.controller.is_some() {
            return;
        }
        if let Some(element) = self.player_ref.cast::<HtmlElement>() {
            self.controller = Some(Controller::attach(
                DomHost,
                element,
                ctx.props().force_iframe,
                &ClientPolicy::default(),
                PlayerApiLoader::page(),
            ));
        }
    }
}
