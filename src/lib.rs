// m3helper Library
// Collects the textures referenced by M3 model files from configured source directories

// Build-time constants
pub mod constants;

// Library error type
pub mod error;

// Core infrastructure - configuration, application state and events
pub mod core;

// Operations - archive discovery, texture extraction, resolution and copying
pub mod operations;

// Utilities - helper functions and tools
pub mod utilities;

// Log view state
pub mod dashboard;

// Rendering of plain state
pub mod render;

// UI - TUI views and the event loop
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig, ConfigStore};
pub use dashboard::DashboardState;
pub use error::{Error, Result};
pub use operations::{
    find_archives, insert_texture_file, process_model, process_models, resolve_textures,
    texture_references, Placement, ReportSink, Resolution,
};
