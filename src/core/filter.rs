use crate::core::session::Session;

pub struct FilterLogic;

impl FilterLogic {
    /// Hide every patient row whose name does not contain `query`
    /// (case-insensitive). Returns how many rows stay visible.
    ///
    /// Runs over the whole table on each call; an empty query shows all.
    pub fn apply(session: &mut Session, query: &str) -> usize {
        let needle = query.to_lowercase();

        let mut visible = 0;
        for row in session.rows.iter_mut() {
            row.hidden = !row.record.key().contains(&needle);
            if !row.hidden {
                visible += 1;
            }
        }

        visible
    }

    pub fn status_message(query: &str, visible: usize, total: usize) -> String {
        if query.is_empty() {
            format!("Showing all {total} records")
        } else {
            format!("{visible} of {total} records match '{query}'")
        }
    }
}
