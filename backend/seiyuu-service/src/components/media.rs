//! YouTube links and timestamp formatting shared by the post renderers

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Matches watch, short, embed, `/v/` and `/u/x/` style YouTube URLs; group 7 is the video id
static YOUTUBE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("Invalid YouTube regex")
});

const YOUTUBE_ID_LEN: usize = 11;

/// Extract the 11-character video id from a YouTube URL
///
/// # Examples
/// ```
/// use seiyuu_service::components::media::youtube_video_id;
///
/// assert_eq!(
///     youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
///     Some("dQw4w9WgXcQ")
/// );
/// assert_eq!(youtube_video_id("https://vimeo.com/76979871"), None);
/// ```
pub fn youtube_video_id(url: &str) -> Option<String> {
    YOUTUBE_REGEX
        .captures(url.trim())
        .and_then(|cap| cap.get(7))
        .map(|m| m.as_str())
        .filter(|id| id.len() == YOUTUBE_ID_LEN)
        .map(str::to_string)
}

pub fn is_youtube_url(url: &str) -> bool {
    youtube_video_id(url).is_some()
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/0.jpg", video_id)
}

/// `Jan 5, 2025`
pub fn format_list_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `Jan 5, 2025, 03:04 PM`
pub fn format_detail_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_youtube_url_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
        ] {
            assert_eq!(youtube_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{}", url);
        }
    }

    #[test]
    fn test_rejects_non_youtube_and_short_ids() {
        assert!(!is_youtube_url("https://vimeo.com/76979871"));
        assert!(!is_youtube_url("https://youtu.be/short"));
        assert!(!is_youtube_url(""));
    }

    #[test]
    fn test_youtube_derived_urls() {
        assert_eq!(
            youtube_embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            youtube_thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"
        );
    }

    #[test]
    fn test_date_formats() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_list_date(&at), "Jan 5, 2025");
        assert_eq!(format_detail_date(&at), "Jan 5, 2025, 03:04 PM");
    }
}
