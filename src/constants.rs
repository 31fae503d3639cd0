// Application constants
// Names and limits compiled from defaults.yaml at build time

// Include the auto-generated constants from build.rs
mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_defaults.rs"));
}

pub use compiled::*;

/// Application name, used for the about popup and the log directory
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report line for a texture that no source directory provides
pub const NOT_FOUND_LINE: &str = "- not found -";

/// Report line after a texture was copied into the target tree
pub const COPIED_LINE: &str = "Have been copied successfully";

/// Report line when the target tree already holds the texture
pub const ALREADY_EXISTS_LINE: &str = "Already exists, skipping";
