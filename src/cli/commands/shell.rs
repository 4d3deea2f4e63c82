//! Interactive shell: one input line is one UI event.

use crate::cli::commands::{config, list, log};
use crate::cli::parser::{ShellCommand, ShellLine, ViewArg};
use crate::config::Config;
use crate::core::{DailyLogic, FilterLogic, ImportLogic, Session, TransferLogic, View, VisitChanges};
use crate::errors::{AppError, AppResult};
use crate::models::VisitType;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::path::resolve_import_path;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "rpatients> ";

/// What the shell prints after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A state change, printed as a success line.
    Done(String),
    /// Read-only feedback.
    Info(String),
    /// A titled table.
    Table { title: String, body: String },
    /// Raw text (help, JSON, YAML, log).
    Text(String),
    Nothing,
    Quit,
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::new(cfg.clone());
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run(&mut session, stdin.lock(), interactive)
}

/// Read lines until EOF or `quit`, printing every reply.
///
/// Lines are decoded lossily: a line that is not valid UTF-8 is reported
/// like any other bad command and the session carries on.
pub fn run<R: BufRead>(session: &mut Session, mut input: R, interactive: bool) -> AppResult<()> {
    if interactive {
        info(&session.status);
        prompt()?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(['\n', '\r']);

        match execute_line(session, line) {
            Ok(Reply::Quit) => break,
            Ok(reply) => print_reply(reply),
            Err(e) => report(&e),
        }
        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn prompt() -> AppResult<()> {
    print!("{PROMPT}");
    io::stdout().flush()?;
    Ok(())
}

fn print_reply(reply: Reply) {
    match reply {
        Reply::Done(msg) => success(msg),
        Reply::Info(msg) => info(msg),
        Reply::Table { title, body } => {
            header(title);
            print!("{body}");
        }
        Reply::Text(text) => println!("{}", text.trim_end()),
        Reply::Nothing | Reply::Quit => {}
    }
}

fn report(e: &AppError) {
    if e.is_warning() {
        warning(e.title(), e);
    } else {
        error(e);
    }
}

/// `filter`/`search` take the rest of the line verbatim (inner spaces and
/// `#` included); only the single separator after the command word is
/// dropped.
fn raw_filter_query(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let (word, rest) = match line.find(char::is_whitespace) {
        Some(i) => line.split_at(i),
        None => (line, ""),
    };
    if !matches!(word, "filter" | "search") {
        return None;
    }

    let mut chars = rest.chars();
    chars.next();
    Some(chars.as_str())
}

/// Split and parse one line, then execute it.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn execute_line(session: &mut Session, line: &str) -> AppResult<Reply> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Reply::Nothing);
    }

    if let Some(query) = raw_filter_query(line) {
        let query = vec![query.to_string()];
        return execute(session, ShellCommand::Filter { query });
    }

    let words = shlex::split(trimmed)
        .ok_or_else(|| AppError::Command(format!("Unbalanced quotes in: {trimmed}")))?;

    match ShellLine::try_parse_from(words) {
        Ok(parsed) => execute(session, parsed.command),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(Reply::Text(e.to_string()))
        }
        Err(e) => Err(AppError::Command(e.to_string().trim_end().to_string())),
    }
}

fn parse_visit_type(code: Option<&str>) -> AppResult<Option<VisitType>> {
    code.map(|c| VisitType::from_code(c).ok_or_else(|| AppError::InvalidVisitType(c.to_string())))
        .transpose()
}

/// Central shell dispatcher
pub fn execute(session: &mut Session, cmd: ShellCommand) -> AppResult<Reply> {
    match cmd {
        ShellCommand::Import { file, dedup } => {
            let path = resolve_import_path(&file, &session.config.import_dir);
            match ImportLogic::apply(session, &path, dedup) {
                Ok(outcome) => Ok(Reply::Done(outcome.status_message())),
                Err(e) => {
                    if !e.is_warning() {
                        session.set_status("Import failed");
                    }
                    Err(e)
                }
            }
        }

        ShellCommand::Filter { query } => {
            let query = query.join(" ");
            let visible = FilterLogic::apply(session, &query);
            let msg = FilterLogic::status_message(&query, visible, session.rows.len());
            Ok(Reply::Info(msg))
        }

        ShellCommand::Send { row } => {
            let visit = TransferLogic::apply(session, row)?;
            Ok(Reply::Done(format!("Added {} to Daily Visits", visit.name)))
        }

        ShellCommand::Add {
            name,
            visit_type,
            date,
        } => {
            let entry = VisitChanges {
                name,
                visit_type: parse_visit_type(visit_type.as_deref())?,
                date,
            };
            DailyLogic::add(session, entry);
            session.switch_view(View::Daily);
            Ok(Reply::Done(session.status.clone()))
        }

        ShellCommand::Edit {
            row,
            name,
            visit_type,
            date,
        } => {
            let changes = VisitChanges {
                name,
                visit_type: parse_visit_type(visit_type.as_deref())?,
                date,
            };
            let exists = row.checked_sub(1).is_some_and(|i| i < session.daily.len());
            if !exists {
                return Err(AppError::InvalidRow(row));
            }
            if changes.is_empty() {
                return Ok(Reply::Info("Nothing to change.".to_string()));
            }
            DailyLogic::edit(session, row, changes)?;
            Ok(Reply::Done(session.status.clone()))
        }

        ShellCommand::Clear => {
            let removed = session.rows.len();
            session.clear_records();
            let msg = format!("Cleared {removed} records");
            session.log.record("clear", "", &msg);
            session.set_status(msg.clone());
            Ok(Reply::Done(msg))
        }

        ShellCommand::View { target } => {
            let view = match target {
                ViewArg::Records => View::Records,
                ViewArg::Daily => View::Daily,
            };
            session.switch_view(view);
            Ok(Reply::Info(format!("Active view: {}", view.title())))
        }

        ShellCommand::List { all, json } => {
            if json {
                return Ok(Reply::Text(list::render_json(session, all)?));
            }
            Ok(Reply::Table {
                title: session.view.title().to_string(),
                body: list::render(session, all),
            })
        }

        ShellCommand::Set { key, value } => Ok(Reply::Done(config::set(session, key, value))),

        ShellCommand::Config => Ok(Reply::Text(config::print(session)?)),

        ShellCommand::Status => Ok(Reply::Info(session.status.clone())),

        ShellCommand::Log => Ok(Reply::Text(log::print(session))),

        ShellCommand::Quit => Ok(Reply::Quit),
    }
}
