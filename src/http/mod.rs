//! HTTP protocol implementation.
//!
//! This module implements the single-request HTTP/1.x exchange the server
//! performs on every connection. There is no keep-alive: one request line is
//! read, one response is written and the connection is closed.
//!
//! # Architecture
//!
//! - **`line`**: Whitespace trimming and single-separator splitting
//! - **`request`**: The parsed request line (method, path, version)
//! - **`parser`**: Turns a request line into a [`request::Request`]
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes responses and streams file bodies to the client
//! - **`connection`**: The per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!   AwaitRequestLine ─► ParseRequest ─► SkipHeaders ─┬─► MapPath ─► OpenFile ─► StatFile
//!                                                    │                              │
//!                                                    │ (fixed mode)                 ▼
//!                                                    └──────► Respond        WriteResponse
//!                                                               │                   │
//!                                                               │                   ▼
//!                                                               │              StreamBody
//!                                                               ▼                   │
//!                                                             Closed ◄──────────────┘
//! ```
//!
//! Every state may exit early to `Closed` (or to `Respond` with an error
//! response when error responses are enabled).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fuzzy_nemesis::config::Config;
//! use fuzzy_nemesis::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let site = Config::load()?.site();
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let site = Arc::clone(&site);
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, site).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod line;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
