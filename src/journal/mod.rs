//! The append-only transaction journal.
//!
//! One human-readable sentence per state-changing operation, newline
//! delimited, consumed by nothing else in the system. The sink is an external
//! collaborator behind the [`TransactionSink`] trait so the registry actor can
//! be tested against [`MemorySink`] and run against [`FileSink`] in
//! production.
//!
//! Writes are best effort: the actor downgrades failures to `warn!` and they
//! never affect the outcome of a business operation.

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Destination for transaction journal lines.
#[async_trait]
pub trait TransactionSink: Send + Sync {
    /// Appends one line (without trailing newline) to the journal.
    async fn append(&self, line: &str) -> io::Result<()>;
}

/// Appends newline-delimited text to a file on disk.
///
/// The file is opened, written, and closed per call, so the handle is released
/// on every exit path. Concurrent writers would need external serialization;
/// the single registry actor is the only writer here.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransactionSink for FileSink {
    async fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

/// In-memory sink for tests: records every appended line.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("journal lines poisoned").clone()
    }
}

#[async_trait]
impl TransactionSink for MemorySink {
    async fn append(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .expect("journal lines poisoned")
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_sink_appends_newline_delimited_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource_log.txt");
        let sink = FileSink::new(&path);

        sink.append("Resource R1 of type equipment added.").await.unwrap();
        sink.append("Resource R1 allocated to project Alpha").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Resource R1 of type equipment added.\nResource R1 allocated to project Alpha\n"
        );
    }

    #[tokio::test]
    async fn file_sink_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory component that does not exist.
        let path = dir.path().join("missing").join("resource_log.txt");
        let sink = FileSink::new(&path);

        assert!(sink.append("line").await.is_err());
    }

    #[tokio::test]
    async fn memory_sink_records_lines_in_order() {
        let sink = MemorySink::new();
        sink.append("first").await.unwrap();
        sink.append("second").await.unwrap();
        assert_eq!(sink.lines(), vec!["first".to_string(), "second".to_string()]);
    }
}
