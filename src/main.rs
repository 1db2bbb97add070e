use anyhow::Result;
use clap::Parser;
use insightd::{config::InsightConfig, rest, AppContext};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "insightd",
    about = "Business insight daemon — synthesizes mock local-business analytics",
    version
)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "INSIGHTD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "INSIGHTD_BIND")]
    bind_address: Option<String>,

    /// Data directory holding config.toml
    #[arg(long, env = "INSIGHTD_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "INSIGHTD_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "INSIGHTD_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Execution mode: "local" (compute in-process) or "remote"
    /// (delegate to a peer endpoint, fall back to local on failure)
    #[arg(long, env = "INSIGHTD_MODE")]
    mode: Option<String>,

    /// Base URL of the remote insight endpoint (remote mode)
    #[arg(long, env = "INSIGHTD_REMOTE_URL")]
    remote_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Arc::new(InsightConfig::new(
        args.port,
        args.data_dir,
        args.log.clone(),
        args.bind_address,
        args.mode,
        args.remote_url,
    ));

    let _log_guard = init_logging(&config.log, &config.log_format, args.log_file.as_deref());

    info!(
        port = config.port,
        mode = ?config.mode,
        "starting insightd v{}",
        env!("CARGO_PKG_VERSION")
    );

    let ctx = AppContext::new(config);
    rest::start_rest_server(ctx).await
}

/// Initialise tracing. Returns the appender guard when file logging is on;
/// dropping it flushes buffered log lines.
fn init_logging(
    log_level: &str,
    log_format: &str,
    log_file: Option<&std::path::Path>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("insightd.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            // Fall back to stdout-only — don't panic on a bad log path.
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}
