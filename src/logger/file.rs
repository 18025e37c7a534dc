/// File persistence for log lines
///
/// One append-only file per day under the logs directory. Every failure here
/// is swallowed: losing a log line must never fail a command.
use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static LOG_FILE: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Daily log file name, e.g. `terkode_2024-05-01.log`
pub fn log_file_name() -> String {
    format!("terkode_{}.log", Local::now().format("%Y-%m-%d"))
}

pub fn init_file_logging(logs_dir: &Path) {
    if fs::create_dir_all(logs_dir).is_err() {
        return;
    }

    let path: PathBuf = logs_dir.join(log_file_name());
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(BufWriter::new(file));
    }
}

pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(writer) = guard.as_mut() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

pub fn flush_file_logging() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(writer) = guard.as_mut() {
            let _ = writer.flush();
        }
    }
}
