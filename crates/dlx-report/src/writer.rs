//! Report file output.
//!
//! Writes the report document as pretty-printed JSON. The parent
//! directory is created when missing.

use crate::document::ReportDocument;
use crate::error::ReportResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write the report document to `path` as pretty JSON.
pub fn write_report(doc: &ReportDocument, path: &Path) -> ReportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        path = %path.display(),
        results = doc.results.len(),
        errors = doc.summary.errors.len(),
        "Report written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Summary;
    use chrono::Utc;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_and_read_back() {
        let doc = ReportDocument {
            summary: Summary::new(Utc::now()),
            results: BTreeMap::new(),
            generated_at: Utc::now(),
        };

        let dir = std::env::temp_dir().join("dlx-writer-test");
        let path = dir.join("nested").join("report.json");
        write_report(&doc, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed.get("summary").is_some());
        assert!(parsed.get("generatedAt").is_some());

        std::fs::remove_dir_all(&dir).ok();
    }
}
