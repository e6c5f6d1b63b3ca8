//! Generated source assembly and output
//!
//! `SourceWriter` accumulates lines at explicit nesting depths; the finished
//! `OutputArtifact` is written to disk in a single atomic replace.

use std::fmt;
use std::io::Write;
use std::path::Path;

use abigen_common::{Error, Result};
use tracing::{debug, info};

/// Line buffer that renders nesting depth with a fixed indentation unit
#[derive(Debug)]
pub struct SourceWriter {
    indent_unit: &'static str,
    lines: Vec<String>,
}

impl SourceWriter {
    pub fn new(indent_unit: &'static str) -> Self {
        Self {
            indent_unit,
            lines: Vec::new(),
        }
    }

    /// Append `text` nested `depth` levels deep. Blank lines carry no indentation.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", self.indent_unit.repeat(depth), text));
        }
    }

    pub fn finish(self) -> OutputArtifact {
        OutputArtifact { lines: self.lines }
    }
}

/// Finished generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    lines: Vec<String>,
}

impl OutputArtifact {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File contents: newline-joined lines with a trailing newline
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl fmt::Display for OutputArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Write `artifact` to `path`, replacing any existing file.
///
/// Content goes to a temporary file in the destination directory which is then
/// renamed over `path`, so a failed write never leaves a truncated file behind.
pub fn write_artifact(artifact: &OutputArtifact, path: &Path) -> Result<()> {
    let path_display = path.display().to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| Error::output_write(&path_display, e.to_string()))?;
    debug!(temp = %file.path().display(), "staging generated output");

    file.write_all(artifact.render().as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| Error::output_write(&path_display, e.to_string()))?;

    file.persist(path)
        .map_err(|e| Error::output_write(&path_display, e.error.to_string()))?;

    info!(path = %path_display, lines = artifact.len(), "wrote generated interface");
    Ok(())
}
