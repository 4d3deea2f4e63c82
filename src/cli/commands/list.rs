use crate::core::session::{Session, View};
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::colors::{colorize_optional, colorize_visit_type, dim};
use crate::utils::formatting::plural;
use crate::utils::table::Table;

/// Text table of the patient records. Hidden rows only with `all`.
pub fn render_records(session: &Session, all: bool) -> String {
    if session.rows.is_empty() {
        return "No records. Import a CSV file to begin.\n".to_string();
    }

    let mut table = Table::new([
        "#".to_string(),
        session.columns.name.clone(),
        session.columns.date.clone(),
    ]);

    for (i, row) in session.rows.iter().enumerate() {
        let number = (i + 1).to_string();
        let rec = &row.record;
        if !row.hidden {
            table.add_row(vec![number, rec.name.clone(), rec.date.clone()]);
        } else if all {
            table.add_row(vec![dim(&number), dim(&rec.name), dim(&rec.date)]);
        }
    }

    let mut out = table.render();
    out.push_str(&format!(
        "{} of {} shown\n",
        session.visible_count(),
        plural(session.rows.len(), "record")
    ));
    out
}

pub fn render_daily(session: &Session) -> String {
    if session.daily.is_empty() {
        return "No daily visits yet.\n".to_string();
    }

    let mut table = Table::new(["#", "Name", "N/R", "1st Visit"]);
    for (i, visit) in session.daily.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            colorize_optional(&visit.name),
            colorize_visit_type(visit.visit_type),
            colorize_optional(&visit.date),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!("{}\n", plural(session.daily.len(), "visit")));
    out
}

/// Pretty JSON of the active view.
pub fn render_json(session: &Session, all: bool) -> AppResult<String> {
    let json = match session.view {
        View::Records => {
            let records: Vec<&Record> = session
                .rows
                .iter()
                .filter(|r| all || !r.hidden)
                .map(|r| &r.record)
                .collect();
            serde_json::to_string_pretty(&records)
        }
        View::Daily => serde_json::to_string_pretty(&session.daily),
    };
    json.map_err(|e| AppError::Serialize(format!("JSON serialization error: {e}")))
}

pub fn render(session: &Session, all: bool) -> String {
    match session.view {
        View::Records => render_records(session, all),
        View::Daily => render_daily(session),
    }
}
