//! The activity log and its export formats

use crate::activity::event::ActivityEvent;
use crate::error::CampusResult;
use crate::types::{ActivityKind, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// An append-only log of campus activity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    events: Vec<ActivityEvent>,
}

impl ActivityLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the log
    pub fn record(&mut self, event: ActivityEvent) {
        self.events.push(event);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The recorded events, in recording order
    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    /// Number of events of a given kind
    pub fn count_of_kind(&self, kind: ActivityKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Number of successful events
    pub fn success_count(&self) -> usize {
        self.events.iter().filter(|e| e.success).count()
    }

    /// Number of failed events
    pub fn failure_count(&self) -> usize {
        self.events.iter().filter(|e| !e.success).count()
    }

    /// One-paragraph summary of the log
    pub fn summary(&self) -> String {
        format!(
            "Recorded {} events ({} succeeded, {} failed)",
            self.len(),
            self.success_count(),
            self.failure_count()
        )
    }

    /// Write the log as JSON Lines, one event per line
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> CampusResult<()> {
        for event in &self.events {
            let line = serde_json::to_string(event)?;
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Write the log as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> CampusResult<()> {
        writeln!(writer, "{}", ActivityEvent::csv_header())?;
        for event in &self.events {
            writeln!(writer, "{}", event.csv_row())?;
        }
        Ok(())
    }

    /// Export the log to a file in the requested format
    pub fn export(&self, path: impl AsRef<Path>, format: OutputFormat) -> CampusResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match format {
            OutputFormat::Json => self.write_jsonl(&mut writer)?,
            OutputFormat::Csv => self.write_csv(&mut writer)?,
        }

        writer.flush()?;
        info!(path = %path.display(), events = self.len(), %format, "Activity log exported");
        Ok(())
    }
}
