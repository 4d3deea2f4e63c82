use super::{record::Record, visit_type::VisitType};
use crate::utils::date;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailyVisit {
    pub name: String,
    pub visit_type: VisitType, // "N/R" column
    pub date: String,          // "1st Visit" column
}

impl DailyVisit {
    pub fn new(name: impl Into<String>, visit_type: VisitType, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visit_type,
            date: date.into(),
        }
    }

    /// Visit received from the patient table: always a returning patient.
    pub fn from_record(record: &Record) -> Self {
        Self::new(record.name.clone(), VisitType::Recurrent, record.date.clone())
    }

    /// Manually entered visit: empty name, New, dated today.
    pub fn blank() -> Self {
        Self::new("", VisitType::New, date::today_str())
    }
}
