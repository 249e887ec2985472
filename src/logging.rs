use crate::errors::{FileOperation, IoError};
use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Process-wide log sink pair: the console is always active, the file sink
/// only once [`attach_file`] has been called. Both share one format:
/// `<timestamp> [<LEVEL>] <message>`.
struct TeeLogger {
    file: Mutex<Option<File>>,
}
impl TeeLogger {
    fn level_tag(level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red(),
            Level::Warn => "WARN".yellow(),
            Level::Info => "INFO".normal(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".dimmed(),
        }
    }
}
impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);

        eprintln!(
            "{} [{}] {}",
            timestamp,
            TeeLogger::level_tag(record.level()),
            record.args()
        );

        let mut sink = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = sink.as_mut() {
            // plain form for the file; color codes stay on the console
            let _ = writeln!(file, "{} [{}] {}", timestamp, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let mut sink = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = sink.as_mut() {
            let _ = file.flush();
        }
    }
}

lazy_static::lazy_static! {
    static ref LOGGER: TeeLogger = TeeLogger {
        file: Mutex::new(None),
    };
}

/// Installs the console sink. Call once at process start; later calls are
/// no-ops.
pub fn init() {
    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Attaches the file sink at `path`, opened in append mode. Records logged
/// from here on reach both destinations for the rest of the process.
pub fn attach_file(path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| IoError::new(FileOperation::Open, path.to_path_buf(), error))?;

    let mut sink = LOGGER.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *sink = Some(file);
    drop(sink);

    log::info!("File logging activated: {}", path.display());

    Ok(())
}
