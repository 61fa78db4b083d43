use fuzzy_nemesis::http::mime::{DEFAULT_MIME_TYPE, mime_type};

#[test]
fn test_mime_html() {
    assert_eq!(mime_type("index.htm"), "text/html");
    assert_eq!(mime_type("page.html"), "text/html");
}

#[test]
fn test_mime_images() {
    assert_eq!(mime_type("a.jpg"), "image/jpeg");
    assert_eq!(mime_type("a.jpeg"), "image/jpeg");
    assert_eq!(mime_type("a.png"), "image/png");
}

#[test]
fn test_mime_case_insensitive() {
    assert_eq!(mime_type("photo.JPG"), "image/jpeg");
    assert_eq!(mime_type("INDEX.HtM"), "text/html");
}

#[test]
fn test_mime_uses_last_extension() {
    assert_eq!(mime_type("archive.tar.gz"), DEFAULT_MIME_TYPE);
    assert_eq!(mime_type("backup.gz.png"), "image/png");
}

#[test]
fn test_mime_no_extension() {
    assert_eq!(mime_type("noext"), "application/octet-stream");
    assert_eq!(mime_type(""), "application/octet-stream");
}

#[test]
fn test_mime_full_mapped_path() {
    assert_eq!(mime_type("./www///img/logo.png"), "image/png");
    assert_eq!(mime_type("./www///dir.d/README"), DEFAULT_MIME_TYPE);
}

#[test]
fn test_mime_dot_only() {
    assert_eq!(mime_type("file."), DEFAULT_MIME_TYPE);
}
