//! Log output for the `serve` command: human-readable lines on stdout and
//! JSON lines under `logs/`, one file per day.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "catalog.log";
const DEFAULT_FILTER: &str = "art_catalog=info,tower_http=info";

pub fn init_logging() {
    if let Err(e) = std::fs::create_dir_all(LOG_DIR) {
        eprintln!("could not create {LOG_DIR}/, file logging may fail: {e}");
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
        .init();

    // Dropping the guard stops the background writer.
    std::mem::forget(guard);
}
