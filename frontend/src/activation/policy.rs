//! Browser capability heuristics.
//!
//! Some mobile browsers refuse to autoplay an iframe inserted on click, so
//! those clients go through the JS Player API instead. On iPhone that path is
//! unwanted as well, and sites can opt into preparing the iframe as soon as the
//! placeholder scrolls into view. Both decisions are plain user-agent sniffs and
//! are kept swappable rather than refined.

use std::rc::Rc;

/// What the controller knows about the visiting browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub user_agent: String,
    pub vendor: String,
}

impl ClientInfo {
    pub fn new(user_agent: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            vendor: vendor.into(),
        }
    }
}

type Predicate = Rc<dyn Fn(&ClientInfo) -> bool>;

/// Pair of predicates choosing the activation strategy for a client.
#[derive(Clone)]
pub struct ClientPolicy {
    needs_scripted_player: Predicate,
    supports_forced_iframe: Predicate,
}

impl ClientPolicy {
    pub fn new(
        needs_scripted_player: impl Fn(&ClientInfo) -> bool + 'static,
        supports_forced_iframe: impl Fn(&ClientInfo) -> bool + 'static,
    ) -> Self {
        Self {
            needs_scripted_player: Rc::new(needs_scripted_player),
            supports_forced_iframe: Rc::new(supports_forced_iframe),
        }
    }

    pub fn needs_scripted_player(&self, client: &ClientInfo) -> bool {
        (self.needs_scripted_player)(client)
    }

    /// Forced-iframe mode needs both the page's request and a matching client.
    pub fn should_force_iframe(&self, requested: bool, client: &ClientInfo) -> bool {
        requested && (self.supports_forced_iframe)(client)
    }
}

impl Default for ClientPolicy {
    fn default() -> Self {
        Self::new(is_mobile_or_apple, is_iphone)
    }
}

fn is_mobile_or_apple(client: &ClientInfo) -> bool {
    client.user_agent.to_ascii_lowercase().contains("mobi")
        || client.vendor.to_ascii_lowercase().contains("apple")
}

fn is_iphone(client: &ClientInfo) -> bool {
    client.user_agent.contains("iPhone")
}
