/// Content type used when the extension is missing or unknown.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
    (".htm", "text/html"),
    (".html", "text/html"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".ico", "image/x-icon"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".txt", "text/plain"),
];

/// Returns the content type for `filename`.
///
/// The extension is everything from the last `.` to the end of the string,
/// compared case-insensitively against a fixed table.
///
/// # Example
///
/// ```
/// # use fuzzy_nemesis::http::mime::mime_type;
/// assert_eq!(mime_type("photo.JPG"), "image/jpeg");
/// assert_eq!(mime_type("archive.tar.gz"), "application/octet-stream");
/// assert_eq!(mime_type("noext"), "application/octet-stream");
/// ```
pub fn mime_type(filename: &str) -> &'static str {
    let Some(dot) = filename.rfind('.') else {
        return DEFAULT_MIME_TYPE;
    };

    let ext = filename[dot..].to_ascii_lowercase();

    MIME_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_MIME_TYPE)
}
