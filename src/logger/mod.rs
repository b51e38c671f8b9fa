//! Logger module
//!
//! Provides logging utilities for the development server including:
//! - Startup banner and file status check output
//! - Access logging with configurable formats
//! - Per-file diagnostic reports (size, BOM detection)
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use std::path::Path;

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_startup_banner(port: u16, serving_dir: &Path) {
    println!("🚀 Starting development HTTP server on port {port}");
    println!("📂 Serving directory: {}", serving_dir.display());
    println!("🌐 Access at: http://localhost:{port}");
    println!("{}", "=".repeat(50));
}

pub fn log_file_check_header() {
    println!("📋 File Status Check:");
}

pub fn log_file_check_found(name: &str, size: u64) {
    println!("  ✅ {name} ({size} bytes)");
}

pub fn log_file_check_missing(name: &str) {
    println!("  ❌ {name} (missing)");
}

pub fn log_file_report(path: &str, size: u64) {
    println!("  📁 File: {path} ({size} bytes)");
}

pub fn log_utf16le_bom(path: &str) {
    println!("  ⚠️  UTF-16 LE BOM detected in {path}");
}

pub fn log_utf8_bom(path: &str) {
    println!("  ⚠️  UTF-8 BOM detected in {path}");
}

pub fn log_no_bom(path: &str) {
    println!("  ✅ No BOM detected in {path}");
}

pub fn log_check_error(path: &str, err: &std::io::Error) {
    println!("  ❌ Error checking {path}: {err}");
}

pub fn log_file_not_found(path: &str) {
    println!("  ❌ File not found: {path}");
}

pub fn log_shutdown() {
    println!("\n🛑 Server stopped");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
