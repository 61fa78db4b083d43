use std::fmt;
use std::io;
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{debug, info};

use crate::config::{ErrorPolicy, ServeMode, SiteConfig};
use crate::files::{MapError, map_path};
use crate::http::line::trim;
use crate::http::mime::mime_type;
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, stream_body};

/// Longest line read in one piece. Longer lines are split across reads.
pub const MAX_LINE_LEN: usize = 512;

/// Handles exactly one request on one connection.
///
/// The stream and any opened file are owned by the connection and released
/// when [`Connection::run`] returns, whichever way it exits.
pub struct Connection<S> {
    stream: BufReader<S>,
    site: Arc<SiteConfig>,
    state: ConnectionState,
    error: Option<anyhow::Error>,
}

pub enum ConnectionState {
    AwaitRequestLine,
    ParseRequest(String),
    SkipHeaders(Request),
    MapPath(Request),
    OpenFile(String),
    StatFile(String, File),
    WriteResponse(Response, Option<File>),
    StreamBody(File),
    Closed,
}

/// Why a request was abandoned.
#[derive(Debug)]
enum Failure {
    Parse(ParseError),
    Map(MapError),
    Open(String, io::Error),
    Stat(io::Error),
}

impl Failure {
    fn response(&self) -> Response {
        match self {
            Failure::Parse(_) => Response::bad_request(),
            Failure::Map(_) | Failure::Open(..) => Response::not_found(),
            Failure::Stat(_) => Response::internal_error(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Parse(e) => write!(f, "bad request: {}", e),
            Failure::Map(e) => write!(f, "failed to map path to filesystem: {}", e),
            Failure::Open(path, e) => write!(f, "failed to open file '{}': {}", path, e),
            Failure::Stat(e) => write!(f, "failed to stat file: {}", e),
        }
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<SiteConfig>) -> Self {
        Self {
            stream: BufReader::new(stream),
            site,
            state: ConnectionState::AwaitRequestLine,
            error: None,
        }
    }

    /// Drives the state machine to `Closed`.
    ///
    /// Request-level failures are not errors here; they only decide whether
    /// an error response is written. An `Err` means the peer went away while
    /// the response was being written.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitRequestLine => match read_line(&mut self.stream).await {
                    Ok(Some(line)) => ConnectionState::ParseRequest(line),
                    Ok(None) => {
                        debug!("Failed to receive request: connection closed");
                        ConnectionState::Closed
                    }
                    Err(e) => {
                        debug!(error = %e, "Failed to receive request");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::ParseRequest(line) => match parse_request_line(&line) {
                    Ok(request) => ConnectionState::SkipHeaders(request),
                    Err(e) => self.fail(Failure::Parse(e)),
                },

                ConnectionState::SkipHeaders(request) => {
                    self.skip_headers().await;
                    info!("Request: {}", request);

                    match self.site.mode {
                        ServeMode::Files => ConnectionState::MapPath(request),
                        ServeMode::Fixed => ConnectionState::WriteResponse(Response::it_works(), None),
                    }
                }

                ConnectionState::MapPath(request) => {
                    match map_path(&self.site.root, &request.path).await {
                        Ok(path) => ConnectionState::OpenFile(path),
                        Err(e) => self.fail(Failure::Map(e)),
                    }
                }

                ConnectionState::OpenFile(path) => match File::open(&path).await {
                    Ok(file) => ConnectionState::StatFile(path, file),
                    Err(e) => self.fail(Failure::Open(path, e)),
                },

                ConnectionState::StatFile(path, file) => match file.metadata().await {
                    Ok(metadata) => {
                        let head = Response::file_head(mime_type(&path), metadata.len());
                        ConnectionState::WriteResponse(head, Some(file))
                    }
                    Err(e) => self.fail(Failure::Stat(e)),
                },

                ConnectionState::WriteResponse(response, body) => {
                    let mut writer = ResponseWriter::new(&response);
                    match writer.write_to_stream(self.stream.get_mut()).await {
                        Ok(()) => match body {
                            Some(file) => ConnectionState::StreamBody(file),
                            None => ConnectionState::Closed,
                        },
                        Err(e) => self.abort(e),
                    }
                }

                ConnectionState::StreamBody(mut file) => {
                    match stream_body(&mut file, self.stream.get_mut()).await {
                        Ok(sent) => {
                            debug!(bytes = sent, "Body sent");
                            ConnectionState::Closed
                        }
                        Err(e) => self.abort(e),
                    }
                }

                ConnectionState::Closed => {
                    // Best effort; the peer may already be gone.
                    let _ = self.stream.get_mut().shutdown().await;
                    break;
                }
            };
        }

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&self, failure: Failure) -> ConnectionState {
        debug!("{}", failure);

        match self.site.error_policy {
            ErrorPolicy::Close => ConnectionState::Closed,
            ErrorPolicy::Respond => ConnectionState::WriteResponse(failure.response(), None),
        }
    }

    fn abort(&mut self, error: anyhow::Error) -> ConnectionState {
        self.error = Some(error);
        ConnectionState::Closed
    }

    /// Discards header lines up to the first blank line or end of stream.
    async fn skip_headers(&mut self) {
        loop {
            match read_line(&mut self.stream).await {
                Ok(Some(line)) if !trim(&line).is_empty() => {}
                Ok(_) => break,
                Err(e) => {
                    debug!(error = %e, "Failed to read header line");
                    break;
                }
            }
        }
    }
}

/// Reads one line of at most [`MAX_LINE_LEN`] bytes, newline included.
///
/// Returns `None` at end of stream. Invalid UTF-8 is replaced, not rejected.
pub async fn read_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::with_capacity(MAX_LINE_LEN);
    let n = (&mut *reader)
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', &mut buf)
        .await?;

    if n == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
