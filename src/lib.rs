//! Fuzzy Nemesis - minimal static file server
//!
//! Core library for request parsing, path mapping and connection handling.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
