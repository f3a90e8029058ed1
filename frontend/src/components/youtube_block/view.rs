//! Placeholder markup, identical to what `common::render::render_block`
//! produces on the server.

use yew::prelude::*;

use common::codec::{aspect_ratio_style, video_id};
use common::model::markup::{
    placeholder_dom_id, thumbnail_url, BLOCK_CLASS, CAPTION_CLASS, DEFAULT_TITLE,
    FORCE_IFRAME_CLASS, PLAYER_CLASS, PLAY_BUTTON_CLASS, VISUALLY_HIDDEN_CLASS,
};
use common::model::params::PlaybackParams;

use super::YoutubeBlock;

pub fn view(component: &YoutubeBlock, ctx: &Context<YoutubeBlock>) -> Html {
    let props = ctx.props();
    let attributes = &props.attributes;
    let wrapper_class = classes!(BLOCK_CLASS, props.force_iframe.then_some(FORCE_IFRAME_CLASS));
    let style = aspect_ratio_style(&attributes.aspect_ratio);

    let Some(video_id) = video_id(&attributes.url) else {
        return html! { <figure class={wrapper_class} style={style} /> };
    };

    let params = PlaybackParams::from_settings(&video_id, &attributes.settings);
    let data_params = (!params.is_empty()).then(|| params.to_json());
    let thumbnail = thumbnail_url(
        &video_id,
        attributes.is_max_res_thumbnail,
        &attributes.custom_thumbnail,
    );
    let background = format!("background-image:url({})", thumbnail);

    html! {
        <figure class={wrapper_class} style={style}>
            <div
                id={placeholder_dom_id(&video_id)}
                class={PLAYER_CLASS}
                ref={component.player_ref.clone()}
                data-video-id={video_id.clone()}
                data-title={DEFAULT_TITLE}
                data-params={data_params}
                style={background}
            >
                <button type="button" class={PLAY_BUTTON_CLASS}>
                    <span class={VISUALLY_HIDDEN_CLASS}>{ DEFAULT_TITLE }</span>
                </button>
            </div>
            if !attributes.caption.trim().is_empty() {
                <figcaption class={CAPTION_CLASS}>{ attributes.caption.clone() }</figcaption>
            }
        </figure>
    }
}
