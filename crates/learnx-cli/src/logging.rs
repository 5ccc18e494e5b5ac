//! Tracing setup for the binary.

use learnx_core::config::LogLevel;
use learnx_infrastructure::LearnxPaths;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "learnx-admin.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Events go to stderr and, when
/// the logs directory can be created, to a daily rolling file. The returned
/// guard must stay alive until exit so buffered file output is flushed.
pub fn init(paths: &LearnxPaths, level: &LogLevel) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .unwrap_or_else(|_| EnvFilter::new(learnx_core::config::DEFAULT_LOG_LEVEL));

    let (file_writer, guard) = match file_appender(paths) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false)))
        .init();

    guard
}

fn file_appender(paths: &LearnxPaths) -> Option<RollingFileAppender> {
    let dir = paths.logs_dir();
    fs::create_dir_all(&dir).ok()?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(&dir)
        .ok()
}
