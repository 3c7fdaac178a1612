//! MIME type lookup for video files.

use std::path::Path;

/// MIME type for a video path, keyed by extension.
///
/// Unknown extensions default to `video/mp4`.
///
/// # Examples
///
/// ```
/// use motionmanga_core::video_mime_type;
///
/// assert_eq!(video_mime_type("clip.MOV"), "video/quicktime");
/// assert_eq!(video_mime_type("clip.webm"), "video/webm");
/// assert_eq!(video_mime_type("clip"), "video/mp4");
/// ```
pub fn video_mime_type(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("mpeg") | Some("mpg") => "video/mpeg",
        Some("wmv") => "video/x-ms-wmv",
        Some("flv") => "video/x-flv",
        Some("3gp") => "video/3gpp",
        _ => "video/mp4",
    }
}
