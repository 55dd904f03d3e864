use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "strati.log";

/// Routes `tracing` output to `<log_dir>/strati.log`. The terminal hosts the
/// UI, so nothing is written to stdout or stderr. Keep the returned guard
/// alive until exit or buffered lines are lost.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    // A subscriber may already be installed (tests); keep the existing one.
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already set");
    }

    tracing::info!(log_file = %log_dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(guard)
}
