use fuzzy_nemesis::config::Config;
use fuzzy_nemesis::server;
use tracing::Level;

#[tokio::main]
async fn main() {
    // Config is read first so DEBUG can pick the log level.
    let cfg = Config::load();
    let debug = cfg.as_ref().is_ok_and(|c| c.debug);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    tokio::select! {
        res = server::listener::run(&cfg) => {
            if let Err(e) = res {
                tracing::error!("Server failed: {:#}", e);
                std::process::exit(1);
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
