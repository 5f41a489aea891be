//! Request handler module
//!
//! Owns the full request lifecycle: path resolution, file reading, and
//! response assembly.

pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
