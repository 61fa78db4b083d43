//! Request path to filesystem path mapping
//!
//! The mapped path is `<root>/<request path>` with every `..` overwritten by
//! `__`. This is containment by blanking, not normalization: `/a/../b` maps
//! to `<root>//a/__/b`, never to `<root>/b`, and a segment such as `x..y`
//! becomes `x__y`. The string length never changes.

use std::fmt;

/// Maximum mapped path length, counting one byte for a terminator. A mapped
/// path may therefore hold at most `MAPPED_PATH_CAPACITY - 1` bytes.
pub const MAPPED_PATH_CAPACITY: usize = 256;

/// Appended when the mapped path names a directory.
pub const INDEX_SUFFIX: &str = "/index.htm";

const TRAVERSAL: &str = "..";
const FILLER: &str = "__";

#[derive(Debug)]
pub enum MapError {
    /// `<root>/<path>` does not fit in [`MAPPED_PATH_CAPACITY`].
    PathTooLong { len: usize, capacity: usize },
    /// The mapped path does not exist or could not be inspected.
    NotFound(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::PathTooLong { len, capacity } => {
                write!(f, "mapped path is {} bytes, capacity is {}", len, capacity)
            }
            MapError::NotFound(path) => write!(f, "'{}' not found", path),
        }
    }
}

impl std::error::Error for MapError {}

/// Joins `root` and `request_path` and blanks every `..`.
///
/// No filesystem access happens here.
pub fn build_path(root: &str, request_path: &str) -> Result<String, MapError> {
    let len = root.len() + 1 + request_path.len();
    if len >= MAPPED_PATH_CAPACITY {
        return Err(MapError::PathTooLong {
            len,
            capacity: MAPPED_PATH_CAPACITY,
        });
    }

    let mut mapped = String::with_capacity(len);
    mapped.push_str(root);
    mapped.push('/');
    mapped.push_str(request_path);

    while let Some(pos) = mapped.find(TRAVERSAL) {
        mapped.replace_range(pos..pos + TRAVERSAL.len(), FILLER);
    }

    Ok(mapped)
}

/// Maps a request path to an existing filesystem entry under `root`.
///
/// Directories resolve to their `index.htm`; whether that file exists is
/// left to whoever opens it. Existence is checked on every call and may
/// change before the caller opens the file.
pub async fn map_path(root: &str, request_path: &str) -> Result<String, MapError> {
    let mut mapped = build_path(root, request_path)?;

    let metadata = match tokio::fs::metadata(&mapped).await {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::debug!(path = %mapped, error = %e, "Failed to stat mapped path");
            return Err(MapError::NotFound(mapped));
        }
    };

    if metadata.is_dir() {
        mapped.push_str(INDEX_SUFFIX);
    }

    Ok(mapped)
}
