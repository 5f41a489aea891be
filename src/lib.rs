//! Clean-URL static file server.
//!
//! Maps request paths to files under a fixed document root:
//! extensionless paths resolve to `.html` files, directory paths
//! resolve to `index.html`.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
