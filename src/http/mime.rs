//! MIME type table
//!
//! Returns the Content-Type for a file extension. The table is fixed
//! and matched exactly on the lowercase extension; anything not listed
//! is served as `application/octet-stream`.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use cleanserve::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), "text/html");
/// assert_eq!(content_type_for(Some("css")), "text/css");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        // image/jpg is non-standard but is what this server has always sent
        Some("jpg") => "image/jpg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
