// Model Processing
// Runs extraction, resolution and placement for a model and reports each step

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use super::placement::{insert_texture_file, Placement};
use super::resolve::resolve_textures;
use super::textures::texture_references;
use crate::constants::{ALREADY_EXISTS_LINE, COPIED_LINE, NOT_FOUND_LINE};
use crate::error::Result;
use crate::utilities::is_model_path;
use crate::utilities::paths::file_name_string;

/// Receives human-readable progress lines
pub trait ReportSink {
    /// Append one line
    fn report(&mut self, line: String);
}

impl ReportSink for Vec<String> {
    fn report(&mut self, line: String) {
        self.push(line);
    }
}

/// Writes each report line to an `io::Write` (stdout for the CLI)
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn report(&mut self, line: String) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            warn!("Failed to write report line: {}", e);
        }
    }
}

fn report(sink: &mut dyn ReportSink, line: String) {
    debug!(target: "m3helper::report", "{}", line);
    sink.report(line);
}

/// Process one model file
///
/// Textures are copied into `target_dir` only when it is given. Progress is
/// reported line by line; unresolved textures and existing destinations are
/// reported, not treated as failures.
pub fn process_model(
    model: &Path,
    source_dirs: &[String],
    target_dir: Option<&Path>,
    sink: &mut dyn ReportSink,
) -> Result<()> {
    report(sink, format!("Processing \"{}\"", file_name_string(model)));

    let references = texture_references(model)?;
    let total = references.len();
    report(sink, format!("Model uses {} textures", total));

    let resolution = resolve_textures(&references, source_dirs);

    for (index, (reference, found)) in resolution.iter().enumerate() {
        report(sink, format!("[{:02}/{:02}] {}", index + 1, total, reference));

        let Some(source) = found else {
            report(sink, NOT_FOUND_LINE.to_string());
            continue;
        };

        report(sink, source.display().to_string());

        if let Some(target) = target_dir {
            let line = match insert_texture_file(target, reference, source)? {
                Placement::Copied => COPIED_LINE,
                Placement::AlreadyExists => ALREADY_EXISTS_LINE,
            };
            report(sink, line.to_string());
        }
    }

    report(sink, String::new());
    Ok(())
}

/// Process every dropped path that names a model file
///
/// Other paths are ignored. Stops at the first failing model and returns how
/// many models were processed otherwise.
pub fn process_models<P: AsRef<str>>(
    paths: &[P],
    source_dirs: &[String],
    target_dir: Option<&Path>,
    sink: &mut dyn ReportSink,
) -> Result<usize> {
    let mut processed = 0;

    for path in paths.iter().map(|p| p.as_ref()) {
        if !is_model_path(path) {
            debug!("Ignoring dropped file {}", path);
            continue;
        }
        process_model(Path::new(path), source_dirs, target_dir, sink)?;
        processed += 1;
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_sink() {
        let mut buffer = Vec::new();
        {
            let mut sink = WriteSink::new(&mut buffer);
            sink.report("one".to_string());
            sink.report(String::new());
        }
        assert_eq!(buffer, b"one\n\n");
    }

    #[test]
    fn test_report_without_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("src");
        fs::create_dir_all(source.join("a")).unwrap();
        fs::write(source.join("a/b.dds"), b"tex").unwrap();
        let model = dir.path().join("unit.m3");
        fs::write(&model, b"..a/b.dds\x00..c/d.dds\x00").unwrap();

        let mut lines = Vec::new();
        process_model(&model, &[source.display().to_string()], None, &mut lines).unwrap();

        assert_eq!(
            lines,
            vec![
                "Processing \"unit.m3\"".to_string(),
                "Model uses 2 textures".to_string(),
                "[01/02] a/b.dds".to_string(),
                source.join("a/b.dds").display().to_string(),
                "[02/02] c/d.dds".to_string(),
                NOT_FOUND_LINE.to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_dropped_paths_are_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("unit.m3");
        fs::write(&model, b"").unwrap();
        let paths = vec![
            model.display().to_string(),
            dir.path().join("notes.txt").display().to_string(),
        ];

        let mut lines = Vec::new();
        let processed = process_models(&paths, &[], None, &mut lines).unwrap();

        assert_eq!(processed, 1);
        assert_eq!(lines[1], "Model uses 0 textures");
    }
}
