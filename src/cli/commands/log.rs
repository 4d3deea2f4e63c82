use crate::core::log::LogLogic;
use crate::core::session::Session;

/// `log`: every state change of this session, oldest first.
pub fn print(session: &Session) -> String {
    LogLogic::render(&session.log)
}
