use regex::Regex;
use std::sync::LazyLock;

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid bare id pattern"));

// The id runs up to the first `&`, `#` or `?`, or to the end of the line.
static URL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(youtu.*be.*)/(watch\?v=|embed/|v|shorts|)([^&#?\n]*)")
        .expect("valid video url pattern")
});

/// Extracts the video id from a YouTube URL or returns a bare id unchanged.
///
/// Accepts `watch?v=`, `youtu.be/`, `embed/`, `v/` and `shorts/` forms.
/// Returns `None` when nothing id-like can be found.
pub fn video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if BARE_ID.is_match(input) {
        return Some(input.to_string());
    }

    URL_ID
        .captures(input)
        .and_then(|captures| captures.get(3))
        .map(|id| id.as_str().to_string())
        .filter(|id| !id.is_empty())
}
