// Application state module
// Immutable process-wide state shared by all request handlers

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Constructed once at startup and shared by `Arc`; nothing in it
/// mutates afterwards, so request handlers need no synchronization.
pub struct AppState {
    pub config: Config,
    /// Canonicalized document root.
    pub root: PathBuf,
}

impl AppState {
    /// Create `AppState`, canonicalizing the configured document root.
    ///
    /// Fails if the root does not exist or is not readable.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = PathBuf::from(&config.server.root).canonicalize()?;
        Ok(Self { config, root })
    }
}
