use yew::{html, Component, Context, Html, Properties};

use common::model::block::BlockAttributes;
use common::model::markup::FORCE_IFRAME_CLASS;

use crate::components::youtube_block::YoutubeBlock;

/// Id of the element a page provides to have blocks rendered client side.
pub const ROOT_ID: &str = "byeb-root";

/// Attribute on the root holding a JSON array of `BlockAttributes`.
const BLOCKS_ATTRIBUTE: &str = "data-blocks";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub blocks: Vec<BlockAttributes>,
    #[prop_or_default]
    pub force_iframe: bool,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div>
                { for props.blocks.iter().map(|attributes| html! {
                    <YoutubeBlock attributes={attributes.clone()} force_iframe={props.force_iframe} />
                }) }
            </div>
        }
    }
}

/// Parses the `data-blocks` payload of the root element.
pub fn parse_blocks(raw: &str) -> Result<Vec<BlockAttributes>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Mounts `App` on `#byeb-root` when the page has one.
pub fn mount() {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID))
    else {
        return;
    };

    let blocks = match root.get_attribute(BLOCKS_ATTRIBUTE).as_deref().map(parse_blocks) {
        Some(Ok(blocks)) => blocks,
        Some(Err(error)) => {
            log::warn!("ignoring malformed {}: {}", BLOCKS_ATTRIBUTE, error);
            return;
        }
        None => Vec::new(),
    };
    let force_iframe = root.class_list().contains(FORCE_IFRAME_CLASS);

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            blocks,
            force_iframe,
        },
    )
    .render();
}
