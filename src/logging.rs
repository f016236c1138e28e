use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "f1flat=info";

/// Initializes logging: console output, plus a daily JSON log file when `log_dir` is set.
///
/// The returned guard flushes the file writer on drop and must be held until exit.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            // Ensure logs directory exists
            let _ = fs::create_dir_all(dir);

            let file_appender = tracing_appender::rolling::daily(dir, "f1flat.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

/// `RUST_LOG` when set and valid, otherwise info for this crate
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
