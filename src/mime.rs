//! Extension → MIME lookup used to normalize filters for bridged hosts.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal wildcard MIME pattern accepted by every host.
pub const UNIVERSAL_WILDCARD: &str = "*/*";

// Keyed by lower-cased extension with the leading dot. Built once on first
// use, read-only afterwards.
fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            // Web
            (".html", "text/html"),
            (".css", "text/css"),
            (".js", "application/x-javascript"),
            // Video
            (".avi", "video/msvideo, video/avi, video/x-msvideo"),
            (".mpeg", "video/mpeg"),
            // Image
            (".bmp", "image/bmp"),
            (".gif", "image/gif"),
            (".jpg", "image/jpeg"),
            (".jpeg", "image/jpeg"),
            (".png", "image/png"),
            (".svg", "image/svg+xml"),
            (".tiff", "image/tiff"),
            // Audio
            (".midi", "audio/x-midi"),
            (".mp3", "audio/mpeg"),
            (".ogg", "audio/vorbis, application/ogg"),
            (".wav", "audio/wav, audio/x-wav"),
            // Documents
            (".xml", "application/xml"),
            (".txt", "text/plain"),
            (".tsv", "text/tab-separated-values"),
            (".csv", "text/csv"),
            (".json", "application/json"),
            (".pdf", "application/pdf"),
            (".doc", "application/msword"),
            (
                ".docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
            (".xls", "application/vnd.ms-excel"),
            (
                ".xlsx",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (".ppt", "application/vnd.ms-powerpoint"),
            (
                ".pptx",
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            ),
            // Compressed
            (".zip", "application/zip, application/x-compressed-zip"),
            (".7z", "application/x-7z-compressed"),
            (".rar", "application/x-rar-compressed"),
            // Packages and binaries
            (".apk", "application/vnd.android.package-archive"),
            (".bin", "application/octet-stream"),
            (".exe", "application/x-msdownload"),
            (".epub", "application/epub+zip"),
        ])
    })
}

/// Map a file extension to a MIME pattern.
///
/// Accepts the extension with or without the leading dot, in any case.
/// Unknown extensions map to [`UNIVERSAL_WILDCARD`], never an error.
pub fn extension_to_mime(extension: &str) -> &'static str {
    let key = format!(".{}", extension.trim().trim_start_matches('.')).to_lowercase();
    table().get(key.as_str()).copied().unwrap_or(UNIVERSAL_WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_resolve() {
        assert_eq!(extension_to_mime(".png"), "image/png");
        assert_eq!(extension_to_mime(".wav"), "audio/wav, audio/x-wav");
        assert_eq!(extension_to_mime(".json"), "application/json");
    }

    #[test]
    fn lookup_is_deterministic() {
        for ext in [".png", ".mp3", ".zip", ".nope"] {
            assert_eq!(extension_to_mime(ext), extension_to_mime(ext));
        }
    }

    #[test]
    fn dot_and_case_are_normalized() {
        assert_eq!(extension_to_mime("png"), "image/png");
        assert_eq!(extension_to_mime(".PNG"), "image/png");
        assert_eq!(extension_to_mime("  .Png "), "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_wildcard() {
        assert_eq!(extension_to_mime(".does-not-exist"), UNIVERSAL_WILDCARD);
        assert_eq!(extension_to_mime(""), UNIVERSAL_WILDCARD);
    }
}
