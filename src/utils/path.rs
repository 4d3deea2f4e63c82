//! Path utilities: expand ~ and resolve import paths.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a path typed in the shell.
///
/// A relative path missing from the working directory is looked up in
/// `import_dir`; if it is not there either the original path is kept so
/// the open error names what the user typed.
pub fn resolve_import_path(path: &str, import_dir: &Path) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() || p.exists() {
        return p;
    }

    let candidate = import_dir.join(&p);
    if candidate.exists() { candidate } else { p }
}

/// File name shown in status messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
