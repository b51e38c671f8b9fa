//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension, plus the
//! explicit overrides applied to script/stylesheet/markup request targets.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use devserve::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(get_content_type(Some("png")), "image/png");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",

        // Default
        _ => "application/octet-stream",
    }
}

/// Content-Type override for the raw request target.
///
/// The suffix is tested against the target as sent by the client, query
/// string included, so `/app.js?v=2` gets no override. Checked in order:
/// `.js`, `.css`, `.html`; first match wins.
///
/// # Examples
/// ```
/// use devserve::http::mime::override_for_target;
/// assert_eq!(
///     override_for_target("/app.js"),
///     Some("application/javascript; charset=utf-8")
/// );
/// assert_eq!(override_for_target("/app.js?v=2"), None);
/// ```
pub fn override_for_target(target: &str) -> Option<&'static str> {
    if target.ends_with(".js") {
        Some("application/javascript; charset=utf-8")
    } else if target.ends_with(".css") {
        Some("text/css; charset=utf-8")
    } else if target.ends_with(".html") {
        Some("text/html; charset=utf-8")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css; charset=utf-8");
        assert_eq!(
            get_content_type(Some("js")),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(get_content_type(Some("json")), "application/json");
        assert_eq!(get_content_type(Some("png")), "image/png");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_override_order() {
        assert_eq!(
            override_for_target("/script.js"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(
            override_for_target("/styles.css"),
            Some("text/css; charset=utf-8")
        );
        assert_eq!(
            override_for_target("/index.html"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(override_for_target("/data.json"), None);
        assert_eq!(override_for_target("/"), None);
    }

    #[test]
    fn test_override_ignores_parameterized_targets() {
        // The historical suffix check ran on the raw target, so a query
        // string suppresses the override.
        assert_eq!(override_for_target("/script.js?v=2"), None);
        assert_eq!(override_for_target("/styles.css?cache=no"), None);
    }
}
