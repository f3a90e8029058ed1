//! Playback parameters passed to the YouTube player.
//!
//! Parameters travel from the markup producer to the browser as a JSON object
//! in the `data-params` attribute. At activation time the controller parses
//! them back, forces `autoplay` and `playsinline`, and serializes the result
//! as a query string (native iframe) or as `playerVars` (scripted player).

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

use crate::model::block::{EmbedSettings, MultipleMode};
use crate::model::markup::EMBED_HOST;

/// A single parameter value. Authors only ever produce strings and integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Text(text) => serializer.serialize_str(text),
            ParamValue::Number(number) => serializer.serialize_i64(*number),
        }
    }
}

/// Insertion-ordered map of player parameters.
///
/// `set` replaces an existing key by moving it to the end, so the last
/// parameters written are the last ones in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackParams {
    entries: Vec<(String, ParamValue)>,
}

impl PlaybackParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the author-level parameters from the block settings.
    pub fn from_settings(video_id: &str, settings: &EmbedSettings) -> Self {
        let mut params = Self::new();

        match settings.multiple_mode {
            MultipleMode::Multiple if !settings.video_ids.is_empty() => {
                params.set("playlist", format!("{},{}", video_id, settings.video_ids));
            }
            MultipleMode::Playlist if !settings.playlist_id.is_empty() => {
                params.set("list", settings.playlist_id.as_str());
            }
            _ => {}
        }

        if settings.looping == 1 {
            params.set("loop", 1);
            if !params.contains("playlist") && !params.contains("list") {
                params.set("playlist", video_id);
            }
        }

        if settings.rel == 0 {
            params.set("rel", 0);
        }

        params
    }

    /// Parses the serialized `data-params` attribute.
    ///
    /// Anything other than a JSON object yields an empty map. Nested arrays
    /// and objects are dropped; booleans, floats and null keep their JSON text.
    pub fn from_data_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return Self::new();
        };

        let mut params = Self::new();
        for (key, value) in map {
            let value = match value {
                Value::String(text) => ParamValue::Text(text),
                Value::Number(number) => match number.as_i64() {
                    Some(integer) => ParamValue::Number(integer),
                    None => ParamValue::Text(number.to_string()),
                },
                Value::Bool(flag) => ParamValue::Text(flag.to_string()),
                Value::Null => ParamValue::Text("null".to_string()),
                Value::Array(_) | Value::Object(_) => continue,
            };
            params.set(key, value);
        }
        params
    }

    /// Adds the parameters every activation needs, overriding author values.
    pub fn for_playback(mut self) -> Self {
        self.set("autoplay", 1);
        self.set("playsinline", 1);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        self.entries.retain(|(existing, _)| *existing != key);
        self.entries.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// JSON object for the `data-params` attribute.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Percent-encoded query string, without the leading `?`.
    ///
    /// Spaces become `%20` rather than `+`; both decode to the same value.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Serialize for PlaybackParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Source URL of the native iframe for `video_id`.
pub fn embed_src(video_id: &str, params: &PlaybackParams) -> String {
    format!(
        "{}{}?{}",
        EMBED_HOST,
        urlencoding::encode(video_id),
        params.to_query_string()
    )
}
