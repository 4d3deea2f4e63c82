use serde::Serialize;
use std::fmt;

/// New/Recurrent classifier of a daily visit ("N/R" column).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum VisitType {
    #[default]
    New,
    Recurrent,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::New => "New",
            VisitType::Recurrent => "Recurrent",
        }
    }

    /// Helper: convert input code from the shell (any case, full or short form)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "new" | "n" => Some(VisitType::New),
            "recurrent" | "r" => Some(VisitType::Recurrent),
            _ => None,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, VisitType::New)
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
