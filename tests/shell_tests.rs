use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rpatients::cli::commands::shell::{Reply, execute_line, run};
use rpatients::core::View;
use rpatients::errors::AppError;
use rpatients::models::VisitType;
use rpatients::utils::formatting::strip_ansi;

mod common;
use common::{TWO_PATIENTS, rpt, session, temp_csv, visible_names};

#[test]
fn test_shell_line_import_filter_send() {
    let path = temp_csv("shell_line_import", TWO_PATIENTS.as_bytes());
    let mut s = session(true);

    let reply = execute_line(&mut s, &format!("import '{}'", path.display())).expect("import");
    assert_eq!(
        reply,
        Reply::Done("Imported 2 records from shell_line_import_rpatients.csv".to_string())
    );

    let reply = execute_line(&mut s, "filter ali").expect("filter");
    assert_eq!(reply, Reply::Info("1 of 2 records match 'ali'".to_string()));
    assert_eq!(visible_names(&s), vec!["Alice"]);

    let reply = execute_line(&mut s, "send 1").expect("send");
    assert_eq!(reply, Reply::Done("Added Alice to Daily Visits".to_string()));
    assert_eq!(s.view, View::Daily);
    assert_eq!(s.daily[0].visit_type, VisitType::Recurrent);
}

#[test]
fn test_shell_filter_joins_words_and_clears() {
    let mut s = session(true);
    rpatients::core::ImportLogic::apply_reader(
        &mut s,
        "Name,Date\nMary Jane,1\nMary,2\n".as_bytes(),
        "p.csv",
        false,
    )
    .expect("import");

    execute_line(&mut s, "filter mary jane").expect("filter");
    assert_eq!(visible_names(&s), vec!["Mary Jane"]);

    execute_line(&mut s, "filter").expect("clear filter");
    assert_eq!(visible_names(&s), vec!["Mary Jane", "Mary"]);
}

#[test]
fn test_shell_filter_keeps_query_verbatim() {
    let mut s = session(true);
    rpatients::core::ImportLogic::apply_reader(
        &mut s,
        "Name,Date\nAnn  Lee,1\nAnn Lee,2\nRoom #4,3\nBob,4\n".as_bytes(),
        "p.csv",
        false,
    )
    .expect("import");

    let reply = execute_line(&mut s, "filter ann  lee").expect("double space");
    assert_eq!(reply, Reply::Info("1 of 4 records match 'ann  lee'".to_string()));
    assert_eq!(visible_names(&s), vec!["Ann  Lee"]);

    execute_line(&mut s, "search #4").expect("hash");
    assert_eq!(visible_names(&s), vec!["Room #4"]);

    execute_line(&mut s, "filter ").expect("empty query");
    assert_eq!(s.visible_count(), 4);
}

#[test]
fn test_shell_add_and_edit_visit() {
    let mut s = session(true);

    execute_line(&mut s, r#"add "Grace Hopper" --type r --date 2024-05-01"#).expect("add");
    execute_line(&mut s, "edit 1 --type new").expect("edit");

    assert_eq!(s.daily.len(), 1);
    assert_eq!(s.daily[0].name, "Grace Hopper");
    assert_eq!(s.daily[0].visit_type, VisitType::New);
    assert_eq!(s.daily[0].date, "2024-05-01");
}

#[test]
fn test_shell_rejects_bad_input() {
    let mut s = session(true);

    let err = execute_line(&mut s, "add Bob --type maybe").unwrap_err();
    assert!(matches!(err, AppError::InvalidVisitType(ref t) if t == "maybe"));

    let err = execute_line(&mut s, "send 1").unwrap_err();
    assert!(matches!(err, AppError::InvalidRow(1)));

    let err = execute_line(&mut s, "frobnicate").unwrap_err();
    assert!(matches!(err, AppError::Command(_)));

    let err = execute_line(&mut s, "add 'unterminated").unwrap_err();
    assert!(matches!(err, AppError::Command(_)));
}

#[test]
fn test_shell_edit_unknown_row_without_changes() {
    let mut s = session(true);
    execute_line(&mut s, "add Ada").expect("add");

    let err = execute_line(&mut s, "edit 99").unwrap_err();
    assert!(matches!(err, AppError::InvalidRow(99)));

    let reply = execute_line(&mut s, "edit 1").expect("existing row");
    assert_eq!(reply, Reply::Info("Nothing to change.".to_string()));
}

#[test]
fn test_shell_run_survives_invalid_utf8_line() {
    let mut s = session(true);
    let input: &[u8] = b"add Ada\n\xff\xfe\nadd Bob\r\n";

    run(&mut s, input, false).expect("loop keeps going");

    let names: Vec<&str> = s.daily.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bob"]);
}

#[test]
fn test_shell_ignores_blank_and_comment_lines() {
    let mut s = session(true);

    assert_eq!(execute_line(&mut s, "   ").expect("blank"), Reply::Nothing);
    assert_eq!(execute_line(&mut s, "# note").expect("comment"), Reply::Nothing);
    assert_eq!(execute_line(&mut s, "exit").expect("exit"), Reply::Quit);
}

#[test]
fn test_shell_set_and_config() {
    let mut s = session(true);

    execute_line(&mut s, "set clear-on-import off").expect("set");
    assert!(!s.config.clear_on_import);

    match execute_line(&mut s, "config").expect("config") {
        Reply::Text(yaml) => assert!(yaml.contains("clear_on_import: false")),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn test_shell_list_json_of_daily_view() {
    let mut s = session(true);
    execute_line(&mut s, "add Ada --date 2024-01-01").expect("add");

    match execute_line(&mut s, "list --json").expect("list") {
        Reply::Text(json) => {
            let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
            assert_eq!(v[0]["name"], "Ada");
            assert_eq!(v[0]["visit_type"], "New");
            assert_eq!(v[0]["date"], "2024-01-01");
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn test_shell_list_hides_filtered_rows_unless_all() {
    let mut s = session(true);
    rpatients::core::ImportLogic::apply_reader(&mut s, TWO_PATIENTS.as_bytes(), "p.csv", false)
        .expect("import");
    execute_line(&mut s, "filter ali").expect("filter");

    let Reply::Table { title, body } = execute_line(&mut s, "list").expect("list") else {
        panic!("expected a table");
    };
    assert_eq!(title, "Patient Records");
    let body = strip_ansi(&body);
    assert!(body.contains("Alice"));
    assert!(!body.contains("Bob"));
    assert!(body.contains("1 of 2 records shown"));

    let Reply::Table { body, .. } = execute_line(&mut s, "list --all").expect("list") else {
        panic!("expected a table");
    };
    assert!(strip_ansi(&body).contains("Bob"));
}

#[test]
fn test_shell_log_records_changes() {
    let mut s = session(true);
    execute_line(&mut s, "add Ada").expect("add");
    execute_line(&mut s, "clear").expect("clear");

    let Reply::Text(log) = execute_line(&mut s, "log").expect("log") else {
        panic!("expected text");
    };
    let log = strip_ansi(&log);
    assert!(log.contains("add (Ada)"));
    assert!(log.contains("Cleared 0 records"));
}

#[test]
fn test_shell_failed_import_sets_status() {
    let mut s = session(true);

    let err = execute_line(&mut s, "import /definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
    assert_eq!(s.status, "Import failed");

    // warnings leave the status alone
    let path = temp_csv("shell_status_empty", b"");
    let err = execute_line(&mut s, &format!("import '{}'", path.display())).unwrap_err();
    assert!(err.is_warning());
    assert_eq!(s.status, "Import failed");
}

// ---------------------------
// Binary
// ---------------------------

#[test]
fn test_cli_import_prints_table() {
    let path = temp_csv("cli_import_table", TWO_PATIENTS.as_bytes());

    rpt()
        .args(["import", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Imported 2 records from cli_import_table_rpatients.csv"))
        .stdout(contains("Alice"))
        .stdout(contains("2024-01-02"));
}

#[test]
fn test_cli_import_filter_json() {
    let path = temp_csv("cli_import_json", TWO_PATIENTS.as_bytes());

    let out = rpt()
        .args(["import", path.to_str().unwrap(), "--filter", "bo", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: serde_json::Value = serde_json::from_slice(&out).expect("json only on stdout");
    assert_eq!(v.as_array().map(Vec::len), Some(1));
    assert_eq!(v[0]["name"], "Bob");
}

#[test]
fn test_cli_import_dedup_keep_existing() {
    let path = temp_csv("cli_import_dedup", TWO_PATIENTS.as_bytes());
    let p = path.to_str().unwrap();

    rpt()
        .args(["--keep-existing", "import", p, p, "--dedup"])
        .assert()
        .success()
        .stdout(contains("(Skipped 2 duplicates)"))
        .stdout(contains("2 of 2 records shown"));
}

#[test]
fn test_cli_import_uses_import_dir() {
    temp_csv("cli_import_dir", TWO_PATIENTS.as_bytes());
    let dir = std::env::temp_dir();

    rpt()
        .args([
            "--import-dir",
            dir.to_str().unwrap(),
            "import",
            "cli_import_dir_rpatients.csv",
        ])
        .assert()
        .success()
        .stdout(contains("Alice"));
}

#[test]
fn test_cli_import_empty_file_fails() {
    let path = temp_csv("cli_import_empty", b"");

    rpt()
        .args(["import", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("The CSV file appears to be empty."));
}

#[test]
fn test_cli_shell_script_from_stdin() {
    let path = temp_csv("cli_shell_script", TWO_PATIENTS.as_bytes());
    let script = format!(
        "import '{}'\nfilter ali\nlist\nsend 1\nlist\nsend 7\nquit\nlist\n",
        path.display()
    );

    rpt()
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("1 of 2 records match 'ali'"))
        .stdout(contains("Added Alice to Daily Visits"))
        .stdout(contains("Recurrent"))
        .stdout(contains("Bob").not())
        .stderr(contains("Invalid row number: 7"));
}

#[test]
fn test_cli_shell_warns_on_missing_columns() {
    let path = temp_csv("cli_shell_header", b"Name\nAlice\n");

    rpt()
        .write_stdin(format!("import '{}'\nlist\n", path.display()))
        .assert()
        .success()
        .stdout(contains("Invalid Format"))
        .stdout(contains("CSV must have 'Name' and 'Date' columns."))
        .stdout(contains("No records. Import a CSV file to begin."));
}
