//! Logging Infrastructure
//!
//! Structured logging with console output and optional daily-rotating file
//! logs (deleted after 14 days).

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix for rotated logs (`gate.YYYY-MM-DD`)
const LOG_FILE_PREFIX: &str = "gate";

/// Clean up log files older than 14 days.
///
/// Call periodically (e.g. daily) to keep the log directory bounded.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(14);

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(rest) = name.strip_prefix(LOG_FILE_PREFIX)
            && let Some(date_part) = rest.strip_prefix('.')
            && let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(local_datetime) = Local
                .from_local_datetime(&naive_date.and_hms_opt(0, 0, 0).unwrap())
                .single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize logging: console layer plus an optional daily-rotating file.
///
/// # Arguments
/// * `level` - default filter when `RUST_LOG` is unset
/// * `json_format` - JSON output (production) or pretty output (development)
/// * `log_dir` - optional directory for `gate.YYYY-MM-DD` files
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let file_writer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            // Keep the directory bounded
            tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));

            Some(RollingFileAppender::new(
                Rotation::DAILY,
                log_dir,
                LOG_FILE_PREFIX,
            ))
        }
        None => None,
    };

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        match file_writer {
            Some(appender) => {
                let file_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(appender));
                subscriber.with(console_layer).with(file_layer).init();
            }
            None => subscriber.with(console_layer).init(),
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        match file_writer {
            Some(appender) => {
                let file_layer = fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender));
                subscriber.with(console_layer).with(file_layer).init();
            }
            None => subscriber.with(console_layer).init(),
        }
    }

    Ok(())
}

/// Initialize console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Hourly cleanup task for old log files
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}
