//! Access log line format
//!
//! `[time] method path status kind`, where kind is `json`, `ajax`,
//! `json+ajax` or `-`.

use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub time: DateTime<Local>,
    pub remote_addr: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub json: bool,
    pub ajax: bool,
}

impl AccessLogEntry {
    /// Entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            time: Local::now(),
            remote_addr,
            method,
            path,
            status: 200,
            json: false,
            ajax: false,
        }
    }

    fn kind(&self) -> &'static str {
        match (self.json, self.ajax) {
            (true, true) => "json+ajax",
            (true, false) => "json",
            (false, true) => "ajax",
            (false, false) => "-",
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{} - [{}] \"{} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.kind(),
        )
    }
}
