use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "a2a.log";

pub fn log_dir() -> anyhow::Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine the cache directory")?;
    Ok(cache.join("a2a").join("logs"))
}

/// Sends tracing output to a daily rolling file so the terminal only shows
/// presenter output. The returned guard flushes the writer on drop.
pub fn init(filter: &str) -> anyhow::Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter: {filter}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;

    Ok(guard)
}
