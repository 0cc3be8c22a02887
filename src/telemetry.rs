use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info,tower_http=info";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Installs the global subscriber: `RUST_LOG` filter plus a compact
/// single-line formatter. ANSI colors only when stdout is a terminal.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_target(true)
        .with_ansi(io::stdout().is_terminal());

    tracing_subscriber::registry().with(filter).with(layer).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_rfc3339_utc_seconds() {
        let mut out = String::new();
        ChronoRfc3339Utc.format_time(&mut Writer::new(&mut out)).unwrap();

        assert!(out.ends_with('Z'), "{out}");
        assert!(!out.contains('.'), "{out}");
        assert!(chrono::DateTime::parse_from_rfc3339(&out).is_ok(), "{out}");
    }
}
