// Utilities module
// Helper functions and tools

pub mod paths;
pub mod patterns;

pub use paths::{glob_insensitive, join_reference};
pub use patterns::{ends_with_ignore_case, is_model_path, parse_dropped_paths, ArchiveMatcher};
