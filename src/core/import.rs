use crate::core::session::{ColumnLabels, Session};
use crate::errors::{AppError, AppResult};
use crate::models::{Record, Row};
use crate::utils::path::display_name;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Result of one import, reported as a single status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub file_name: String,
    pub imported: usize,
    pub skipped: usize,
    pub deduplicate: bool,
}

impl ImportOutcome {
    pub fn status_message(&self) -> String {
        let mut msg = format!("Imported {} records from {}", self.imported, self.file_name);
        if self.deduplicate && self.skipped > 0 {
            msg.push_str(&format!(" (Skipped {} duplicates)", self.skipped));
        }
        msg
    }
}

/// Position of the Name and Date columns in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderColumns {
    name: usize,
    date: usize,
}

impl HeaderColumns {
    /// Case-insensitive, trimmed match; the last matching column wins.
    fn locate(header: &StringRecord) -> Option<Self> {
        let mut name = None;
        let mut date = None;

        for (i, raw) in header.iter().enumerate() {
            match normalize_header(raw).as_str() {
                "name" => name = Some(i),
                "date" => date = Some(i),
                _ => {}
            }
        }

        Some(Self {
            name: name?,
            date: date?,
        })
    }

    fn labels(&self, header: &StringRecord) -> ColumnLabels {
        let label = |i: usize, fallback: &str| {
            header
                .get(i)
                .map(|h| h.trim_start_matches('\u{feff}').to_string())
                .unwrap_or_else(|| fallback.to_string())
        };
        ColumnLabels {
            name: label(self.name, "Name"),
            date: label(self.date, "Date"),
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn import_error(e: impl std::fmt::Display) -> AppError {
    AppError::Import(e.to_string())
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import `path` into the patient table.
    pub fn apply(
        session: &mut Session,
        path: &Path,
        deduplicate: bool,
    ) -> AppResult<ImportOutcome> {
        let file_name = display_name(path);
        let file = File::open(path).map_err(import_error)?;
        Self::apply_reader(session, file, &file_name, deduplicate)
    }

    /// Import CSV text from any reader.
    ///
    /// The table is only cleared once a data row has been read, so a file
    /// that is empty or has a bad header leaves it untouched. A parse
    /// error half-way keeps the rows already appended.
    pub fn apply_reader<R: Read>(
        session: &mut Session,
        reader: R,
        file_name: &str,
        deduplicate: bool,
    ) -> AppResult<ImportOutcome> {
        let clear = session.config.clear_on_import;

        if !clear {
            session
                .dedup
                .extend(session.rows.iter().map(|r| r.record.name.as_str()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = rdr.records();

        let header = match records.next() {
            None => return Err(AppError::EmptyFile),
            Some(r) => r.map_err(import_error)?,
        };
        let columns = HeaderColumns::locate(&header).ok_or(AppError::InvalidFormat)?;
        let min_len = columns.name.max(columns.date) + 1;

        let mut outcome = ImportOutcome {
            file_name: file_name.to_string(),
            imported: 0,
            skipped: 0,
            deduplicate,
        };
        let mut started = false;

        for result in records {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    let msg = format!("aborted after {} rows: {e}", outcome.imported);
                    session.log.record("import", file_name, &msg);
                    return Err(import_error(e));
                }
            };

            if !started {
                started = true;
                if clear {
                    session.clear_records();
                }
                session.columns = columns.labels(&header);
            }

            if row.len() < min_len {
                continue;
            }

            let name = &row[columns.name];
            let date = &row[columns.date];

            if deduplicate && session.dedup.contains(name) {
                outcome.skipped += 1;
                continue;
            }

            session.rows.push(Row::new(Record::new(name, date)));
            session.dedup.insert(name);
            outcome.imported += 1;
        }

        if !started {
            return Err(AppError::EmptyFile);
        }

        let msg = outcome.status_message();
        session.log.record("import", file_name, &msg);
        session.set_status(msg);

        Ok(outcome)
    }
}
