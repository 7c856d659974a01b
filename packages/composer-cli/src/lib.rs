#![deny(clippy::all)]

/**
 * HMVC Composer CLI
 *
 * Composes pages described by JSON manifests against a directory of views
 */
pub use hmvc_composer as composer;

pub mod config;
pub mod logging;
pub mod manifest;
pub mod perform_compose;


/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
