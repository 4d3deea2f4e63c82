#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rpatients::config::Config;
use rpatients::core::Session;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TWO_PATIENTS: &str = "Name,Date\nAlice,2024-01-01\nBob,2024-01-02\n";

pub fn rpt() -> Command {
    cargo_bin_cmd!("rpatients")
}

/// Write `content` to a unique CSV path inside the system temp dir
pub fn temp_csv(name: &str, content: &[u8]) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpatients.csv", name));
    fs::write(&path, content).expect("write test csv");
    path
}

/// Session with default settings except "clear on import"
pub fn session(clear_on_import: bool) -> Session {
    Session::new(Config {
        clear_on_import,
        import_dir: env::temp_dir(),
    })
}

pub fn names(session: &Session) -> Vec<String> {
    session.records().map(|r| r.name.clone()).collect()
}

pub fn visible_names(session: &Session) -> Vec<String> {
    session.visible_rows().map(|(_, r)| r.name.clone()).collect()
}
