//! Stderr logging for the puzzle pipeline.
//!
//! Each record is printed as `[elapsed LEVEL stage] message`, where `stage`
//! is the last segment of the module path (`sample`, `normalize`, `solver`,
//! ...). Install once at startup with [`init_with_level`], or with
//! [`init_tracing`] when the `tracing` feature is on.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::EnvFilter;

/// Crates whose records are shown at the default tracing level.
#[cfg(feature = "tracing")]
const DEFAULT_DIRECTIVES: &str = "queens_grid=info,queens_grid_core=info,queens_grid_solver=info";

struct StageLogger {
    level: LevelFilter,
    started: Instant,
}

/// Pipeline stage named by a log target: `queens_grid_solver::normalize`
/// becomes `normalize`; a bare crate name is kept as is.
fn stage(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_line(elapsed_secs: f64, level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{elapsed_secs:7.3}s {level:>5} {}] {args}", stage(target))
}

impl Log for StageLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args(),
        );
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StageLogger> = OnceLock::new();

/// Install the stderr logger at `level`.
///
/// Only the first call installs a logger; later calls leave it in place
/// and return `Ok`.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        StageLogger {
            level,
            started: Instant::now(),
        }
    });
    if fresh {
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing-subscriber` fmt subscriber. `RUST_LOG` overrides the
/// default of `info` for the queens-grid crates. Span close events carry
/// per-stage timings; `json` switches to flattened JSON lines.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder.compact().finish().try_init()
    };
}
