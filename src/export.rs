//! One-shot export of the interaction log.
//!
//! Produces a debug dump of the current buffer as pretty JSON or JSONL,
//! wrapped in an envelope carrying the format version, producer metadata,
//! a session identifier, and the device hostname. The store never reads an
//! export back; dumps exist purely for offline inspection.

use crate::store::record::LogRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// The current export format version.
pub const EXPORT_VERSION: &str = "1.0";

/// The name of this producer.
pub const PRODUCER_NAME: &str = "interaction-log";

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// A single pretty-printed JSON envelope
    Json,
    /// One metadata line followed by one record per line
    Jsonl,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "jsonl" => Ok(ExportFormat::Jsonl),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Producer metadata included in every export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportProducer {
    /// Name of the producing library
    pub name: String,
    /// Version of the producing library
    pub version: String,
}

/// The export envelope wrapping a dump of the record buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEnvelope {
    /// Export format version
    pub version: String,
    /// Producer metadata
    pub producer: ExportProducer,
    /// Identifier of the exporting session
    pub session_id: Uuid,
    /// Hostname of the exporting device
    pub device: String,
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Number of records in the dump
    pub record_count: usize,
    /// The records, in insertion order
    pub records: Vec<LogRecord>,
}

/// Builder for export envelopes.
///
/// Holds the per-session identity (a v4 UUID and the device hostname) so
/// repeated exports from the same process share it.
pub struct ExportBuilder {
    session_id: Uuid,
    device: String,
}

impl ExportBuilder {
    /// Create a builder with a fresh session ID and the local hostname.
    pub fn new() -> Self {
        let device = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            session_id: Uuid::new_v4(),
            device,
        }
    }

    /// The session identifier stamped on every envelope from this builder.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Build an envelope around a snapshot of the given records.
    pub fn build(&self, records: &[LogRecord]) -> ExportEnvelope {
        ExportEnvelope {
            version: EXPORT_VERSION.to_string(),
            producer: ExportProducer {
                name: PRODUCER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            session_id: self.session_id,
            device: self.device.clone(),
            exported_at: Utc::now(),
            record_count: records.len(),
            records: records.to_vec(),
        }
    }

    /// Build an envelope and write it under `dir`, returning the file path.
    pub fn export_to(
        &self,
        records: &[LogRecord],
        dir: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        write_envelope(&self.build(records), dir, format)
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an envelope under `dir` as `interaction-log-{timestamp}.{ext}`.
pub fn write_envelope(
    envelope: &ExportEnvelope,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io(e.to_string()))?;

    let stamp = envelope.exported_at.format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("interaction-log-{stamp}.{}", format.extension()));

    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(envelope)
            .map_err(|e| ExportError::Serialize(e.to_string()))?,
        ExportFormat::Jsonl => {
            let meta = serde_json::json!({
                "version": &envelope.version,
                "producer": &envelope.producer,
                "session_id": envelope.session_id,
                "device": &envelope.device,
                "exported_at": envelope.exported_at,
                "record_count": envelope.record_count,
            });
            let mut lines = vec![meta.to_string()];
            for record in &envelope.records {
                lines.push(
                    serde_json::to_string(record)
                        .map_err(|e| ExportError::Serialize(e.to_string()))?,
                );
            }
            lines.join("\n") + "\n"
        }
    };

    std::fs::write(&path, content).map_err(|e| ExportError::Io(e.to_string()))?;
    debug!(path = %path.display(), records = envelope.record_count, "log exported");

    Ok(path)
}

/// Export errors.
#[derive(Debug)]
pub enum ExportError {
    Io(String),
    Serialize(String),
    UnknownFormat(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {e}"),
            ExportError::Serialize(e) => write!(f, "Serialize error: {e}"),
            ExportError::UnknownFormat(s) => write!(f, "Unknown export format: {s}"),
        }
    }
}

impl std::error::Error for ExportError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::ElementType;

    fn sample_records() -> Vec<LogRecord> {
        vec![
            LogRecord::new(ElementType::Button, "Button Click - Save"),
            LogRecord::with_duration(ElementType::ViewController, "Screen Disappear - Login", 1.0),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSONL".parse::<ExportFormat>().unwrap(), ExportFormat::Jsonl);
        assert!(matches!(
            "csv".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_envelope_metadata() {
        let builder = ExportBuilder::new();
        let envelope = builder.build(&sample_records());

        assert_eq!(envelope.version, EXPORT_VERSION);
        assert_eq!(envelope.producer.name, PRODUCER_NAME);
        assert_eq!(envelope.session_id, builder.session_id());
        assert_eq!(envelope.record_count, 2);
        assert_eq!(envelope.records.len(), 2);
    }

    #[test]
    fn test_envelope_roundtrip() {
        let envelope = ExportBuilder::new().build(&sample_records());
        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: ExportEnvelope = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.record_count, 2);
        assert_eq!(parsed.records[0].action, "Button Click - Save");
        assert_eq!(parsed.records[1].duration_secs, Some(1.0));
    }
}
