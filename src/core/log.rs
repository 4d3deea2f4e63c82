//! In-memory activity log of the session.

use crate::utils::formatting::visible_width;
use ansi_term::Colour;
use chrono::Local;

/// Colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Green,
        "add" => Colour::Green,
        "send" => Colour::Blue,
        "edit" => Colour::Yellow,
        "clear" => Colour::Red,
        "set" => Colour::Purple,
        "view" => Colour::Cyan,
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default, Clone)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the log.
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(log: &ActivityLog) -> String {
        if log.is_empty() {
            return "No activity yet.".to_string();
        }

        let rows: Vec<(usize, String, String, String)> = log
            .entries()
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                // single column op+target
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                let colored = color_for_operation(&e.operation)
                    .paint(op_target)
                    .to_string();

                (e.id, date, colored, e.message.clone())
            })
            .collect();

        // widest op column, capped at 40
        let op_width = rows
            .iter()
            .map(|(_, _, op, _)| visible_width(op))
            .max()
            .unwrap_or(0)
            .min(40);

        let mut out = String::new();
        for (id, date, op, message) in rows {
            let pad = op_width.saturating_sub(visible_width(&op));
            out.push_str(&format!(
                "{:>3}  {}  {}{}  {}\n",
                id,
                date,
                op,
                " ".repeat(pad),
                message
            ));
        }
        out
    }
}
