// Operations module
// Business logic: archive discovery, texture extraction, resolution and copying

pub mod archives;
pub mod placement;
pub mod process;
pub mod resolve;
pub mod textures;

pub use archives::{find_archives, find_archives_with, ArchiveWalker};
pub use placement::{insert_texture_file, Placement};
pub use process::{process_model, process_models, ReportSink, WriteSink};
pub use resolve::{find_in_sources, resolve_textures, Resolution};
pub use textures::{extract_texture_references, texture_references};
