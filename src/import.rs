//! Bulk schedule import from pasted text, plain-text files and CSV/TSV files.
//!
//! Every source is reduced to lines and each line goes through
//! [`parse_line`] on its own. Lines that yield nothing are counted and
//! dropped; only an import with no items at all is worth reporting.

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::matcher::normalize_key;
use crate::parser::{normalize_dashes, parse_line};
use crate::plan::PlanItem;
use crate::state::MAX_FILE_SIZE;

/// First-column values that mark a header row in delimited files.
const HEADER_WORDS: &[&str] = &["time", "start", "when", "slot"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Text,
    Delimited(u8),
}

impl ImportFormat {
    /// Pick a format from a file extension: `.csv`, `.tsv`, else plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("csv") => ImportFormat::Delimited(b','),
            Some("tsv") => ImportFormat::Delimited(b'\t'),
            _ => ImportFormat::Text,
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub items: Vec<PlanItem>,
    /// Non-blank lines that produced no item.
    pub skipped: usize,
}

impl ImportReport {
    fn push_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let parsed = parse_line(&normalize_dashes(line));
        match parsed.map(|p| PlanItem::new(&p.name, p.time_label)) {
            Some(Ok(item)) => self.items.push(item),
            _ => {
                debug!("Skipping import line '{}'", line.trim());
                self.skipped += 1;
            }
        }
    }
}

/// Parse pasted or plain-text content, one entry per line.
pub fn import_text(text: &str) -> ImportReport {
    let mut report = ImportReport::default();
    for line in text.lines() {
        report.push_line(line);
    }
    info!("Imported {} items from text ({} lines skipped)", report.items.len(), report.skipped);
    report
}

/// Reduce one delimited row to the `time name` line shape.
///
/// Blank fields are ignored; a single field is a bare name.
pub fn reduce_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let fields: Vec<&str> = fields.into_iter().map(str::trim).filter(|f| !f.is_empty()).collect();
    match fields.split_first() {
        None => None,
        Some((only, [])) => Some(only.to_string()),
        Some((first, rest)) => Some(format!("{} {}", first, rest.join(" "))),
    }
}

fn is_header(line: &str) -> bool {
    let key = normalize_key(line);
    key.split(' ').next().is_some_and(|first| HEADER_WORDS.contains(&first))
}

/// Parse CSV/TSV content. Rows go through the same line parser as text.
pub fn import_delimited(text: &str, delimiter: u8) -> ImportReport {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut report = ImportReport::default();
    let mut first_row = true;
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable row: {}", e);
                report.skipped += 1;
                continue;
            }
        };
        let Some(line) = reduce_row(record.iter()) else {
            continue;
        };
        if std::mem::take(&mut first_row) && is_header(&line) {
            debug!("Skipping header row '{}'", line);
            continue;
        }
        report.push_line(&line);
    }
    info!(
        "Imported {} items from delimited data ({} rows skipped)",
        report.items.len(),
        report.skipped
    );
    report
}

/// Read everything from `reader` (capped at the state file size limit).
pub fn import_reader(reader: impl Read, format: ImportFormat) -> Result<ImportReport> {
    let mut content = String::new();
    reader
        .take(MAX_FILE_SIZE + 1)
        .read_to_string(&mut content)
        .context("Failed to read import data")?;
    if content.len() as u64 > MAX_FILE_SIZE {
        return Err(anyhow!("Import data exceeds security limits (10MB)"));
    }
    Ok(match format {
        ImportFormat::Text => import_text(&content),
        ImportFormat::Delimited(delimiter) => import_delimited(&content, delimiter),
    })
}

pub fn import_file(path: &Path) -> Result<ImportReport> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to open {}", path.display()))?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(anyhow!("File {} exceeds security limits (10MB)", path.display()));
    }
    let file = fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    import_reader(file, ImportFormat::from_path(path))
}
