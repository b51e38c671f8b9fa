//! File diagnostics module
//!
//! Best-effort reports printed alongside request handling: file size and
//! byte-order-mark detection for script/stylesheet/markup targets, plus the
//! startup check for the conventional project files.
//!
//! Nothing here gates an HTTP response; every failure ends up as a log
//! line.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::logger;

/// Leading bytes inspected when sniffing for a byte-order mark.
const SNIFF_LEN: usize = 10;

/// Files checked in the serving root at startup.
const CONVENTIONAL_FILES: [&str; 3] = ["index.html", "script.js", "styles.css"];

/// Byte-order mark found at the head of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bom {
    Utf16Le,
    Utf8,
}

/// Classify the leading bytes of a file.
///
/// # Examples
/// ```
/// use devserve::diagnostics::{classify_bom, Bom};
/// assert_eq!(classify_bom(&[0xFF, 0xFE, 0x3C, 0x00]), Some(Bom::Utf16Le));
/// assert_eq!(classify_bom(&[0xEF, 0xBB, 0xBF, b'<']), Some(Bom::Utf8));
/// assert_eq!(classify_bom(b"<html>"), None);
/// ```
pub fn classify_bom(head: &[u8]) -> Option<Bom> {
    if head.starts_with(&[0xFF, 0xFE]) {
        Some(Bom::Utf16Le)
    } else if head.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some(Bom::Utf8)
    } else {
        None
    }
}

/// Whether a raw request target gets a per-request diagnostic report.
pub fn is_diagnostic_target(target: &str) -> bool {
    target.ends_with(".js") || target.ends_with(".css") || target.ends_with(".html")
}

/// Derive the diagnostic filesystem path from a raw request target.
///
/// Exactly one leading slash is stripped; query strings, percent-encoding,
/// and `..` segments pass through untouched. Best-effort logging only, not
/// the path the file is actually served from.
pub fn diagnostic_path(target: &str) -> &str {
    target.strip_prefix('/').unwrap_or(target)
}

/// Read up to [`SNIFF_LEN`] bytes from a file and classify its BOM.
pub async fn sniff_bom(path: &Path) -> std::io::Result<Option<Bom>> {
    let mut file = fs::File::open(path).await?;
    let mut head = [0u8; SNIFF_LEN];
    let mut filled = 0;

    // A single read may return short; keep going until the buffer is full
    // or the file ends.
    loop {
        let n = file.read(&mut head[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == SNIFF_LEN {
            break;
        }
    }

    Ok(classify_bom(&head[..filled]))
}

/// Print the size and BOM report for one request target.
///
/// Missing files and read errors are reported per-file and never propagate.
pub async fn report_request_file(target: &str) {
    let path = diagnostic_path(target);

    match fs::metadata(path).await {
        Ok(meta) => {
            logger::log_file_report(path, meta.len());
            match sniff_bom(Path::new(path)).await {
                Ok(Some(Bom::Utf16Le)) => logger::log_utf16le_bom(path),
                Ok(Some(Bom::Utf8)) => logger::log_utf8_bom(path),
                Ok(None) => logger::log_no_bom(path),
                Err(e) => logger::log_check_error(path, &e),
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => logger::log_file_not_found(path),
        Err(e) => logger::log_check_error(path, &e),
    }
}

/// Sizes of the conventional project files under `root`; `None` for absent
/// or unreadable entries.
pub async fn conventional_file_sizes(root: &Path) -> Vec<(&'static str, Option<u64>)> {
    let mut sizes = Vec::with_capacity(CONVENTIONAL_FILES.len());
    for name in CONVENTIONAL_FILES {
        let size = fs::metadata(root.join(name)).await.ok().map(|m| m.len());
        sizes.push((name, size));
    }
    sizes
}

/// Print the startup file status block. Informational only; absence never
/// blocks startup.
pub async fn startup_file_check(root: &Path) {
    logger::log_file_check_header();
    for (name, size) in conventional_file_sizes(root).await {
        match size {
            Some(size) => logger::log_file_check_found(name, size),
            None => logger::log_file_check_missing(name),
        }
    }
    println!();
}
