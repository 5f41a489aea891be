//! Static file serving module
//!
//! Turns a resolution result into an HTTP response: reads the resolved
//! file and maps read failures to 500, unresolved paths to 404.

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::resolve::{resolve, Resolved};
use crate::http::{self, mime};
use crate::logger;

/// Serve the file that answers `path`, if any.
pub async fn serve_path(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match resolve(path, &state.root) {
        Resolved::NotFound => http::build_404_response(),
        Resolved::File(file) => match fs::read(&file.path).await {
            Ok(content) => {
                let content_type = mime::content_type_for(file.extension.as_deref());
                http::build_file_response(content, content_type)
            }
            Err(e) => {
                // Resolution said the file exists; the read still failed
                logger::log_error(&format!(
                    "Failed to read file '{}': {}",
                    file.path.display(),
                    e
                ));
                http::build_500_response()
            }
        },
    }
}
