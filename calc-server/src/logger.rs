//! fern-backed logging with three output modes: colored stdout for
//! interactive use, plain stdout for service managers, append-to-file when
//! a log file is configured.

use crate::error::{ServerError, ServerErrorResult};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::Record;

pub fn initialize(
    log_level: calc_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let dispatch = Dispatch::new().level(log_level.0);

    let dispatch = if let Some(ref path) = log_file {
        // File mode wins over the colored flag; ANSI codes in files are
        // useless to log tooling.
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

        dispatch.format(plain_format).chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        dispatch
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {} [{}:{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    colors.color(record.level()),
                    message,
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                ))
            })
            .chain(std::io::stdout())
    } else {
        dispatch.format(plain_format).chain(std::io::stdout())
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => log::info!(
            "Logger initialized: level={:?}, file={}",
            *log_level,
            path.display()
        ),
        None => log::info!("Logger initialized: level={:?}, stdout", *log_level),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn plain_format(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.level(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ));
}
