use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── Execution mode ───────────────────────────────────────────────────────────

/// Where insight synthesis runs.
///
/// `Remote` delegates to another insight endpoint over HTTP and falls back
/// to local computation on any transport failure; `Local` computes
/// in-process only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Local,
    Remote,
}

impl ExecutionMode {
    /// Parse a mode string from CLI/env ("local" | "remote", case-insensitive).
    /// Unknown values fall back to Local.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "remote" => Self::Remote,
            _ => Self::Local,
        }
    }
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `{data_dir}/config.toml` — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP server port (default: 3001).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Log level filter string, e.g. "debug", "info,insightd=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default) | "json".
    log_format: Option<String>,
    /// Execution mode: "local" (default) | "remote".
    mode: Option<ExecutionMode>,
    /// Base URL of the remote insight endpoint (remote mode only).
    remote_base_url: Option<String>,
    /// Timeout for the remote call in seconds (default: 10).
    remote_timeout_secs: Option<u64>,
    /// Cosmetic delay before returning locally computed data, in
    /// milliseconds (default: 0 = disabled).
    mock_delay_ms: Option<u64>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── InsightConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub port: u16,
    pub bind_address: String,
    pub data_dir: PathBuf,
    pub log: String,
    /// "pretty" (default) | "json".
    pub log_format: String,
    pub mode: ExecutionMode,
    /// Remote insight endpoint base URL (INSIGHTD_REMOTE_URL env var).
    /// None with mode=Remote means remote mode degrades to local.
    pub remote_base_url: Option<String>,
    pub remote_timeout_secs: u64,
    /// Cosmetic latency simulation for locally computed results (0 = off).
    pub mock_delay_ms: u64,
}

impl InsightConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
        mode: Option<String>,
        remote_base_url: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("INSIGHTD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let mode = mode
            .as_deref()
            .map(ExecutionMode::parse)
            .or(toml.mode)
            .unwrap_or_default();

        let remote_base_url = remote_base_url
            .or_else(|| std::env::var("INSIGHTD_REMOTE_URL").ok())
            .filter(|s| !s.is_empty())
            .or(toml.remote_base_url);

        let remote_timeout_secs = toml
            .remote_timeout_secs
            .unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS);

        let mock_delay_ms = std::env::var("INSIGHTD_MOCK_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(toml.mock_delay_ms)
            .unwrap_or(0);

        Self {
            port,
            bind_address,
            data_dir,
            log,
            log_format,
            mode,
            remote_base_url,
            remote_timeout_secs,
            mock_delay_ms,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("insightd");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("insightd");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("insightd");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("insightd");
        }
    }
    // Fallback
    PathBuf::from(".insightd")
}
