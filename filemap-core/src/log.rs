use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Timestamped run log, appended to a file and optionally echoed to stderr.
#[derive(Debug, Default)]
pub struct RunLog {
    file: Option<File>,
    verbose: bool,
}

impl RunLog {
    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(log_file: Option<&Path>, verbose: bool) -> Result<Self> {
        let file = if let Some(path) = log_file {
            // Create parent directory if it doesn't exist
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create log directory {}", parent.display())
                    })?;
                }
            }
            Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?,
            )
        } else {
            None
        };

        Ok(Self { file, verbose })
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        if self.verbose {
            eprintln!("{}", message);
        }
        if let Some(ref mut file) = self.file {
            writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )?;
            file.flush()?;
        }
        Ok(())
    }
}
