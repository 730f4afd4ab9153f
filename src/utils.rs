use crate::types::Packet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = verbose as i8 - quiet as i8;
    let level = match net {
        i8::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i8::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,redek={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Read sensor packets from a JSON file.
///
/// Expects the tracker dump format: an array of `[code, values]` pairs,
/// e.g. `[["SWM", [720, 1, 80, 25, 40]], ["RUN", [15000, 1, 75]]]`.
pub fn load_packets(path: &Path) -> Result<Vec<Packet>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading packet file: {}", path.display()))?;

    let raw: Vec<(String, Vec<f64>)> = serde_json::from_str(&text)
        .with_context(|| format!("parsing packet file: {}", path.display()))?;

    tracing::info!(path = %path.display(), packets = raw.len(), "packet file loaded");

    Ok(raw
        .into_iter()
        .map(|(code, values)| Packet { code, values })
        .collect())
}
