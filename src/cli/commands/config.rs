use crate::cli::parser::{SettingKey, Switch};
use crate::core::session::Session;
use crate::errors::AppResult;

/// `config`: the session settings as YAML.
pub fn print(session: &Session) -> AppResult<String> {
    session.config.to_yaml()
}

/// `set <key> <on|off>`
pub fn set(session: &mut Session, key: SettingKey, value: Switch) -> String {
    let msg = match key {
        SettingKey::ClearOnImport => {
            session.config.clear_on_import = value.is_on();
            format!(
                "Clear existing data on import: {}",
                if value.is_on() { "on" } else { "off" }
            )
        }
    };

    session.log.record("set", "clear-on-import", &msg);
    session.set_status(msg.clone());
    msg
}
