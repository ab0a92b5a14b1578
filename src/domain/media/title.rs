// SPDX-License-Identifier: MPL-2.0
//! Display name shown in the video info banner.

use std::path::Path;

/// Title used when nothing better is known.
pub const FALLBACK_TITLE: &str = "Video";

/// Picks the name shown in the video info banner.
///
/// Preference order: the engine's media title (unless blank or the generic
/// fallback itself), then the last segment of the media path, then
/// [`FALLBACK_TITLE`]. The text after the last `.` is dropped from both.
#[must_use]
pub fn display_name(media_title: Option<&str>, path: Option<&Path>) -> String {
    if let Some(title) = media_title {
        let title = title.trim();
        if !title.is_empty() && title != FALLBACK_TITLE {
            let stem = strip_extension(title);
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }

    path.and_then(|p| p.file_name())
        .and_then(|name| name.to_str())
        .map(strip_extension)
        .filter(|stem| !stem.is_empty())
        .map_or_else(|| FALLBACK_TITLE.to_string(), str::to_string)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
