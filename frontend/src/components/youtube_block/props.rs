//! Properties of the `YoutubeBlock` component.

use yew::prelude::*;

use common::model::block::BlockAttributes;

#[derive(Properties, PartialEq, Clone)]
pub struct YoutubeBlockProps {
    /// Stored block attributes, exactly as the editor saves them.
    pub attributes: BlockAttributes,

    /// Adds the forced-iframe marker to the wrapper, letting iPhone visitors
    /// get the iframe as soon as the placeholder scrolls into view.
    #[prop_or_default]
    pub force_iframe: bool,
}
