// src/sink.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::crawler::CompanyContactRecord;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Append-only JSONL sink for produced records. Every append is flushed so
/// an interrupted run keeps everything written so far.
pub struct RecordSink {
    writer: BufWriter<File>,
    path: PathBuf,
    count: usize,
}

impl RecordSink {
    /// Create a sink in the output directory with a timestamped filename.
    pub fn new(output_dir: &Path) -> Result<Self> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let path = output_dir.join(format!("contacts_{}.jsonl", timestamp));
        Self::with_path(&path)
    }

    /// Create a sink at an explicit path (used by tests).
    pub fn with_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            count: 0,
        })
    }

    pub fn append(&mut self, record: &CompanyContactRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::TeamMember;
    use tempfile::TempDir;

    fn make_record(website: &str) -> CompanyContactRecord {
        CompanyContactRecord {
            company_name: "Webshop BV".to_string(),
            website: website.to_string(),
            emails: vec!["info@webshop.nl".to_string()],
            phones: Vec::new(),
            linkedin: None,
            team_members: vec![TeamMember {
                name: Some("Jan Jansen".to_string()),
                position: Some("E-commerce Manager".to_string()),
                email: None,
            }],
            about_url: None,
            contact_url: None,
            scraped_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn appends_one_json_line_per_record() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.jsonl");
        let mut sink = RecordSink::with_path(&path).unwrap();

        sink.append(&make_record("https://webshop-een.nl/")).unwrap();
        sink.append(&make_record("https://webshop-twee.nl/")).unwrap();
        assert_eq!(sink.count(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<CompanyContactRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].website, "https://webshop-een.nl/");
        assert_eq!(records[1].website, "https://webshop-twee.nl/");
        assert_eq!(records[0].team_members[0].name.as_deref(), Some("Jan Jansen"));
    }

    #[test]
    fn records_are_on_disk_before_the_sink_is_dropped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.jsonl");
        let mut sink = RecordSink::with_path(&path).unwrap();

        sink.append(&make_record("https://webshop-een.nl/")).unwrap();

        // Read while the sink is still alive: the per-record flush is what
        // bounds data loss on interruption.
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        drop(sink);
    }

    #[test]
    fn empty_sink_writes_an_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.jsonl");
        let sink = RecordSink::with_path(&path).unwrap();

        assert_eq!(sink.count(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn new_creates_the_output_directory() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let sink = RecordSink::new(&out_dir).unwrap();

        assert!(out_dir.exists());
        assert!(sink.path().starts_with(&out_dir));
    }
}
