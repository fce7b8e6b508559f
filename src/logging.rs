use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

pub const APP_NAME: &str = "rollover";

/// Directory holding the daily log files.
pub fn log_directory() -> PathBuf {
    std::env::temp_dir().join(APP_NAME).join("logs")
}

pub fn log_file_name() -> String {
    format!("{}_{}_.log", APP_NAME, Local::now().format("%Y_%m_%d"))
}

/// Sends log output to today's log file, or to stderr when that cannot be opened.
/// `RUST_LOG` still overrides the level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();

    let directory = log_directory();
    let log_file = fs::create_dir_all(&directory).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(directory.join(log_file_name()))
    });

    match log_file {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Could not open log file in {}: {}", directory.display(), e);
        }
    }

    // A second init (tests, repeated calls) is harmless.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_format() {
        let name = log_file_name();
        assert!(name.starts_with("rollover_"));
        assert!(name.ends_with("_.log"));
        // rollover_YYYY_MM_DD_.log
        assert_eq!(name.len(), "rollover_".len() + 10 + "_.log".len());
    }

    #[test]
    fn test_log_directory_under_temp() {
        assert!(log_directory().starts_with(std::env::temp_dir()));
    }
}
