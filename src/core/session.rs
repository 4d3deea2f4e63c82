use crate::config::Config;
use crate::core::log::ActivityLog;
use crate::models::{DailyVisit, DedupSet, Record, Row};

/// Which collection `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Records,
    Daily,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Records => "Patient Records",
            View::Daily => "Daily Visits",
        }
    }
}

/// Header labels of the patient table, as spelled in the last imported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    pub name: String,
    pub date: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            date: "Date".to_string(),
        }
    }
}

/// Everything the application holds in memory.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub rows: Vec<Row>,
    pub columns: ColumnLabels,
    pub dedup: DedupSet,
    pub daily: Vec<DailyVisit>,
    pub view: View,
    pub status: String,
    pub log: ActivityLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            rows: Vec::new(),
            columns: ColumnLabels::default(),
            dedup: DedupSet::new(),
            daily: Vec::new(),
            view: View::Records,
            status: "Ready. Import a CSV file to begin.".to_string(),
            log: ActivityLog::new(),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().map(|r| &r.record)
    }

    /// Rows not hidden by the filter, with their 1-based table position.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.hidden)
            .map(|(i, r)| (i + 1, &r.record))
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.hidden).count()
    }

    /// 1-based lookup in the patient table.
    pub fn row(&self, number: usize) -> Option<&Record> {
        number
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| &r.record)
    }

    /// Empty the patient table together with the dedup set.
    pub fn clear_records(&mut self) {
        self.rows.clear();
        self.dedup.clear();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }
}
