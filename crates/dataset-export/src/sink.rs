//! Export sinks.
//!
//! A sink receives a rendered [`ExportArtifact`] and delivers it somewhere.
//! Each call acquires and releases its own destination; sinks hold no open
//! file handles between deliveries.

use crate::error::ExportError;
use crate::format::ExportArtifact;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default buffer size for file writes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Outcome of a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Human-readable destination (file path or stream name)
    pub destination: String,
    /// Number of bytes written
    pub bytes_written: u64,
}

/// Destination for rendered exports.
pub trait ExportSink {
    /// Deliver one artifact.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<ExportReceipt, ExportError>;
}

/// Writes each artifact to `<dir>/<file_name>`, creating the directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink for the given output directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an artifact will be written to.
    pub fn path_for(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(&artifact.file_name)
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<ExportReceipt, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(artifact);
        debug!(
            "Writing '{}' ({}) to {}",
            artifact.file_name,
            artifact.mime_type,
            path.display()
        );

        let write = |path: &Path| -> std::io::Result<()> {
            let file = File::create(path)?;
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
            writer.write_all(artifact.content.as_bytes())?;
            writer.flush()
        };
        write(&path).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        let bytes_written = artifact.content.len() as u64;
        info!("Wrote {} bytes to {}", bytes_written, path.display());

        Ok(ExportReceipt {
            destination: path.display().to_string(),
            bytes_written,
        })
    }
}

/// Writes each artifact's content followed by a newline to a stream.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    name: String,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink over a writer; `name` labels receipts.
    pub fn new(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    /// Sink over standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), "stdout")
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<ExportReceipt, ExportError> {
        self.writer.write_all(artifact.content.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        Ok(ExportReceipt {
            destination: self.name.clone(),
            bytes_written: artifact.content.len() as u64 + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(content: &str) -> ExportArtifact {
        ExportArtifact {
            file_name: "dataset_structured.csv".to_string(),
            mime_type: "text/csv;charset=utf-8",
            content: content.to_string(),
        }
    }

    #[test]
    fn test_directory_sink_creates_dir_and_writes() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("out");
        let mut sink = DirectorySink::new(&out);

        let receipt = sink.deliver(&artifact("a,b\n1,2")).unwrap();

        let path = out.join("dataset_structured.csv");
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,2");
        assert_eq!(receipt.bytes_written, 7);
        assert_eq!(receipt.destination, path.display().to_string());
    }

    #[test]
    fn test_directory_sink_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp_dir.path());

        sink.deliver(&artifact("first")).unwrap();
        sink.deliver(&artifact("second")).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("dataset_structured.csv")).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_directory_sink_reports_create_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let mut sink = DirectorySink::new(blocker.join("sub"));
        let result = sink.deliver(&artifact("x"));
        assert!(matches!(result, Err(ExportError::CreateDir { .. })));
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new(), "buffer");
        let receipt = sink.deliver(&artifact("hello")).unwrap();

        assert_eq!(receipt.destination, "buffer");
        assert_eq!(receipt.bytes_written, 6);
        assert_eq!(sink.into_inner(), b"hello\n");
    }
}
