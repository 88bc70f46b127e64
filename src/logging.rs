use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 专用的过滤器变量，优先于 `RUST_LOG`
const LOG_ENV: &str = "SPONSOR_LOG";
const LOG_FILE_PREFIX: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// 持有期间日志会异步刷入文件；drop 时把剩余日志写完
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// 无法解析的过滤表达式回退到默认值，并把原值交给调用方记录
fn filter_from(directive: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(directive) = directive.map(str::trim).filter(|d| !d.is_empty()) else {
        return (default_filter(), None);
    };
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(_) => (default_filter(), Some(directive.to_string())),
    }
}

fn log_dir() -> Option<PathBuf> {
    sponsor::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir()
                .join(env!("CARGO_PKG_NAME"))
                .join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// 终端被 TUI 占用，日志只写文件
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    let (env_filter, rejected) = filter_from(directive.as_deref());

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    if let Some(rejected) = rejected {
        tracing::warn!(directive = %rejected, "invalid log filter, using default");
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "logging initialized"
    );

    Some(LoggingGuard { _guard: guard })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
