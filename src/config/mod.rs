use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::path::PathBuf;

/// Runtime settings of a session.
///
/// Built from the command line at startup and changed with `set` in the
/// shell. Nothing is ever written back to disk.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Empty the patient table before an import adds rows.
    pub clear_on_import: bool,
    /// Where relative import paths are looked up when not found in the cwd.
    pub import_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_on_import: true,
            import_dir: Self::default_import_dir(),
        }
    }
}

impl Config {
    /// The user's Downloads folder, falling back to ~/Downloads and then ".".
    pub fn default_import_dir() -> PathBuf {
        dirs::download_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join("Downloads")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Apply the command line overrides on top of the defaults.
    pub fn with_overrides(keep_existing: bool, import_dir: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if keep_existing {
            cfg.clear_on_import = false;
        }
        if let Some(dir) = import_dir {
            cfg.import_dir = crate::utils::path::expand_tilde(dir);
        }
        cfg
    }

    /// Current settings as YAML, for `config` in the shell.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Serialize(e.to_string()))
    }
}
