//! Static file serving module
//!
//! Resolves request paths against the serving root and builds file
//! responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::http::{self, mime};
use crate::logger;

/// Index files tried when a request path resolves to a directory.
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Serve a file from the root for a GET/HEAD request.
pub async fn serve(root: &Path, uri_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load_from_root(root, uri_path).await {
        Some((content, content_type)) => http::build_file_response(content, content_type, is_head),
        None => http::build_404_response(),
    }
}

/// Load a file under `root` for the given URI path, with index file
/// fallback for directories.
///
/// The path is confined to the root: `..` segments are removed up front and
/// the canonicalized result must still live under the canonicalized root.
pub async fn load_from_root(root: &Path, uri_path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = uri_path.trim_start_matches('/').replace("..", "");

    let mut file_path = root.join(&clean_path);

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Serving root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // Directory requests fall back to an index file
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in INDEX_FILES {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            uri_path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path_canonical.display()
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), "var x = 1;").unwrap();

        let (content, content_type) = load_from_root(dir.path(), "/app.js").await.unwrap();
        assert_eq!(content, b"var x = 1;");
        assert_eq!(content_type, "application/javascript; charset=utf-8");
    }

    #[tokio::test]
    async fn test_bom_bytes_served_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = b"\xEF\xBB\xBF<html></html>";
        std::fs::write(dir.path().join("index.html"), bytes).unwrap();

        let (content, _) = load_from_root(dir.path(), "/index.html").await.unwrap();
        assert_eq!(content, bytes);
    }

    #[tokio::test]
    async fn test_directory_falls_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let (content, content_type) = load_from_root(dir.path(), "/").await.unwrap();
        assert_eq!(content, b"<html></html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_root(dir.path(), "/missing.css").await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_confined() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        let root = outer.path().join("public");
        std::fs::create_dir(&root).unwrap();

        assert!(load_from_root(&root, "/../secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_directory_without_index_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();

        assert!(load_from_root(dir.path(), "/assets/").await.is_none());
    }
}
