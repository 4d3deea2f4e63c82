use serde::Serialize;

/// One patient row of the main table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub date: String, // kept verbatim, no format check
}

impl Record {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    /// Case-insensitive key used for deduplication and filtering.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A record as held by the main table, with its filter visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub record: Record,
    pub hidden: bool,
}

impl Row {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            hidden: false,
        }
    }
}
