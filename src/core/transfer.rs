use crate::core::session::{Session, View};
use crate::errors::{AppError, AppResult};
use crate::models::DailyVisit;

pub struct TransferLogic;

impl TransferLogic {
    /// "Send to Daily Visits": copy patient row `row` (1-based) into the
    /// worklist as a Recurrent visit and make the worklist the active view.
    ///
    /// The patient table is left as it is. Sending the same row twice adds
    /// two visits.
    pub fn apply(session: &mut Session, row: usize) -> AppResult<DailyVisit> {
        let record = session.row(row).ok_or(AppError::InvalidRow(row))?;
        let visit = DailyVisit::from_record(record);

        session.daily.push(visit.clone());
        session.switch_view(View::Daily);

        let msg = format!("Added {} to Daily Visits", visit.name);
        session.log.record("send", &visit.name, &msg);
        session.set_status(msg);

        Ok(visit)
    }
}
