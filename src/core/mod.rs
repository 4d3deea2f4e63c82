pub mod daily;
pub mod filter;
pub mod import;
pub mod log;
pub mod session;
pub mod transfer;

pub use daily::{DailyLogic, VisitChanges};
pub use filter::FilterLogic;
pub use import::{ImportLogic, ImportOutcome};
pub use log::{ActivityLog, LogLogic};
pub use session::{Session, View};
pub use transfer::TransferLogic;
