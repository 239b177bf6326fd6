//! Append-only activity log under the user's home directory. Operational
//! visibility only: callers ignore logging failures so a full disk or missing
//! home directory never breaks an extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{MetagrabError, Result};

const LOG_DIR: &str = ".metagrab";
const LOG_FILE: &str = "activity.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub domain: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.level,
            self.event,
            self.domain.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or(""),
        )
    }
}

pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            MetagrabError::storage_error("initialization", "could not determine home directory")
        })?;
        let dir = user_dirs.home_dir().join(LOG_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            log_path: dir.join(LOG_FILE),
        })
    }

    /// Log to an explicit file instead of the home directory (tests).
    pub fn with_path(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn info(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.append(LogLevel::Info, domain, event, details)
    }

    pub fn error(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.append(LogLevel::Error, domain, event, details)
    }

    fn append(
        &self,
        level: LogLevel,
        domain: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            domain: domain.map(str::to_string),
            event: event.to_string(),
            details: details.map(str::to_string),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{entry}")?;
        Ok(())
    }

    /// Matching lines, most recent first.
    pub fn read_logs(&self, domain_filter: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let file = fs::File::open(&self.log_path)?;
        let mut matching = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if errors_only && !line.contains(" ERROR ") {
                continue;
            }
            if let Some(domain) = domain_filter {
                if !line.contains(domain) {
                    continue;
                }
            }
            matching.push(line);
        }

        matching.reverse();
        Ok(matching)
    }
}
