//! Logger module
//!
//! Server lifecycle, access and error logging. Output goes to stdout/stderr
//! until [`init`] points it at files.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::HelperConfig;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Relative log file paths are resolved under the layout's log directory.
pub fn init(config: &HelperConfig) -> std::io::Result<()> {
    let layout = config.layout();
    writer::init(
        config.logging.access_log_path(&layout).as_deref(),
        config.logging.error_log_path(&layout).as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &HelperConfig) {
    let layout = config.layout();
    write_info("======================================");
    write_info("webhelpers demo server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Base path: {}", layout.base_path()));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(path) = config.logging.access_log_path(&layout) {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(path) = config.logging.error_log_path(&layout) {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format());
}
