use crate::cli::commands::list;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{FilterLogic, ImportLogic, Session};
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::path::resolve_import_path;

/// Import the given files in order, then print the patient table.
///
/// Files are imported one after the other with the usual clear-on-import
/// rule, so combining several files needs `--keep-existing`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        files,
        dedup,
        filter,
        json,
    } = cmd
    {
        let mut session = Session::new(cfg.clone());

        for file in files {
            let path = resolve_import_path(file, &session.config.import_dir);
            let outcome = ImportLogic::apply(&mut session, &path, *dedup)?;
            if !*json {
                success(outcome.status_message());
            }
        }

        if let Some(query) = filter {
            FilterLogic::apply(&mut session, query);
        }

        if *json {
            println!("{}", list::render_json(&session, false)?);
        } else {
            header(session.view.title());
            print!("{}", list::render_records(&session, false));
        }
    }

    Ok(())
}
