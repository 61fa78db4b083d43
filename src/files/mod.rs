//! Static file lookup
//!
//! Maps request paths to files under the configured server root.

pub mod mapper;

pub use mapper::{INDEX_SUFFIX, MAPPED_PATH_CAPACITY, MapError, build_path, map_path};
