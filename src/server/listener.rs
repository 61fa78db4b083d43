use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use socket2::{Domain, Socket, Type};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::{Config, SiteConfig};
use crate::http::connection::Connection;

/// Pending connections the kernel queues before `accept`.
pub const BACKLOG: i32 = 64;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr)?;
    info!("Server listening on {}", listener.local_addr()?);

    serve(listener, cfg.site()).await
}

/// Creates the listening socket with address and port reuse enabled.
///
/// Must be called from within a Tokio runtime.
pub fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", addr))?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, None)
        .map_err(|e| setup_failure("create socket", e))?;

    socket
        .set_reuse_address(true)
        .map_err(|e| setup_failure("set SO_REUSEADDR", e))?;
    #[cfg(unix)]
    socket
        .set_reuse_port(true)
        .map_err(|e| setup_failure("set SO_REUSEPORT", e))?;

    socket
        .bind(&addr.into())
        .map_err(|e| setup_failure("bind socket", e))?;
    socket
        .listen(BACKLOG)
        .map_err(|e| setup_failure("listen on socket", e))?;
    socket
        .set_nonblocking(true)
        .map_err(|e| setup_failure("set socket non-blocking", e))?;

    let listener = TcpListener::from_std(socket.into())
        .map_err(|e| setup_failure("register socket with runtime", e))?;

    Ok(listener)
}

fn setup_failure(step: &str, e: std::io::Error) -> anyhow::Error {
    error!(errno = e.raw_os_error(), "Failed to {}: {}", step, e);
    anyhow::Error::new(e).context(format!("Failed to {}", step))
}

/// Accepts connections forever, one independent task per connection.
pub async fn serve(listener: TcpListener, site: Arc<SiteConfig>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(errno = e.raw_os_error(), "Failed to accept connection: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, site).run().await {
                debug!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
