use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyVisit, VisitType};

/// Changes to a daily visit; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct VisitChanges {
    pub name: Option<String>,
    pub visit_type: Option<VisitType>,
    pub date: Option<String>,
}

impl VisitChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.visit_type.is_none() && self.date.is_none()
    }
}

pub struct DailyLogic;

impl DailyLogic {
    /// Append a manually entered visit: New and dated today unless given.
    /// Returns the 1-based row number of the new visit.
    pub fn add(session: &mut Session, entry: VisitChanges) -> usize {
        let mut visit = DailyVisit::blank();
        Self::merge(&mut visit, entry);

        let msg = if visit.name.is_empty() {
            "Added new visit".to_string()
        } else {
            format!("Added new visit for {}", visit.name)
        };
        session.log.record("add", &visit.name, &msg);
        session.set_status(msg);

        session.daily.push(visit);
        session.daily.len()
    }

    /// Edit visit `row` (1-based) in place.
    pub fn edit(session: &mut Session, row: usize, changes: VisitChanges) -> AppResult<DailyVisit> {
        let visit = row
            .checked_sub(1)
            .and_then(|i| session.daily.get_mut(i))
            .ok_or(AppError::InvalidRow(row))?;

        Self::merge(visit, changes);
        let updated = visit.clone();

        let msg = format!(
            "Updated visit {row}: {} | {} | {}",
            updated.name, updated.visit_type, updated.date
        );
        session.log.record("edit", &updated.name, &msg);
        session.set_status(msg);

        Ok(updated)
    }

    fn merge(visit: &mut DailyVisit, changes: VisitChanges) {
        if let Some(name) = changes.name {
            visit.name = name;
        }
        if let Some(t) = changes.visit_type {
            visit.visit_type = t;
        }
        if let Some(date) = changes.date {
            visit.date = date;
        }
    }
}
