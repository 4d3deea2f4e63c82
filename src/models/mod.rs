pub mod daily_visit;
pub mod dedup_set;
pub mod record;
pub mod visit_type;

pub use daily_visit::DailyVisit;
pub use dedup_set::DedupSet;
pub use record::{Record, Row};
pub use visit_type::VisitType;
