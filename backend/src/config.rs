//! Server configuration read from the environment.
//!
//! | variable                                    | default     |
//! |---------------------------------------------|-------------|
//! | `BYEB_HOST`                                 | `127.0.0.1` |
//! | `BYEB_PORT`                                 | `8080`      |
//! | `BYEB_SPEED_UP_YOUTUBE_VIDEOS`              | off         |
//! | `BYEB_FORCE_IFRAME_ON_UNSUPPORTED_BROWSERS` | off         |
//! | `BYEB_OPEN_BROWSER`                         | on          |
//!
//! Flags accept `1`, `true`, `yes` and `on` (any case) as enabled.

use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Serve YouTube embeds of the generic embed block as lazy blocks.
    pub speed_up_youtube_videos: bool,
    /// Mark rendered blocks so iPhone visitors get the iframe on visibility.
    pub force_iframe_on_unsupported_browsers: bool,
    /// Open the served URL in the default browser at startup.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            speed_up_youtube_videos: false,
            force_iframe_on_unsupported_browsers: false,
            open_browser: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("BYEB_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("invalid BYEB_PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("BYEB_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            speed_up_youtube_videos: flag(
                lookup("BYEB_SPEED_UP_YOUTUBE_VIDEOS"),
                defaults.speed_up_youtube_videos,
            ),
            force_iframe_on_unsupported_browsers: flag(
                lookup("BYEB_FORCE_IFRAME_ON_UNSUPPORTED_BROWSERS"),
                defaults.force_iframe_on_unsupported_browsers,
            ),
            open_browser: flag(lookup("BYEB_OPEN_BROWSER"), defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}
