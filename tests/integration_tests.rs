use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{setup_workbook, tb, temp_out, write_default_workbook, write_range};

#[test]
fn init_creates_the_workbook_skeleton() {
    let mut wb: PathBuf = env::temp_dir();
    wb.push("init_tutorbill_wb");
    fs::remove_dir_all(&wb).ok();
    let wb_path = wb.to_string_lossy().to_string();

    tb().args(["--sheet", &wb_path, "--test", "init"])
        .assert()
        .success();

    for range in ["sessions", "clients", "cutoffs", "payments", "counter"] {
        assert!(wb.join(format!("{range}.csv")).exists(), "missing {range}");
    }
    let counter = fs::read_to_string(wb.join("counter.csv")).unwrap();
    assert_eq!(counter.trim(), "0001");
}

#[test]
fn invoice_dry_run_renders_without_mutating() {
    let wb = setup_workbook("cli_dry");
    let out = temp_out("cli_dry");
    write_default_workbook(&wb);
    let wb_path = wb.to_string_lossy().to_string();
    let out_path = out.to_string_lossy().to_string();

    tb().args([
        "--sheet",
        &wb_path,
        "--out",
        &out_path,
        "invoice",
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(contains("ALICE PARKER"))
    .stdout(contains("BEN OOTJE"))
    .stdout(contains("Dry run: wrote"));

    assert!(out.join("Fall 2025").join("INV-0007_AP.pdf").exists());
    assert!(out.join("Fall 2025").join("INV-0008_BO.pdf").exists());

    // Dry runs leave the workbook alone.
    let counter = fs::read_to_string(wb.join("counter.csv")).unwrap();
    assert_eq!(counter.trim(), "0007");
}

#[test]
fn unknown_client_fails_the_run_but_not_the_batch() {
    let wb = setup_workbook("cli_unknown");
    let out = temp_out("cli_unknown");
    write_default_workbook(&wb);
    let wb_path = wb.to_string_lossy().to_string();
    let out_path = out.to_string_lossy().to_string();

    tb().args([
        "--sheet",
        &wb_path,
        "--out",
        &out_path,
        "invoice",
        "--dry-run",
        "Nobody",
        "Ben Ootje",
    ])
    .assert()
    .failure()
    .stdout(contains("BEN OOTJE"))
    .stderr(contains("No client record found for 'Nobody'"));

    // The sibling client was still processed.
    assert!(out.join("Fall 2025").join("INV-0007_BO.pdf").exists());
}

#[test]
fn summary_dry_run_renders_semester_documents() {
    let wb = setup_workbook("cli_summary");
    let out = temp_out("cli_summary");
    write_default_workbook(&wb);
    let wb_path = wb.to_string_lossy().to_string();
    let out_path = out.to_string_lossy().to_string();

    tb().args([
        "--sheet",
        &wb_path,
        "--out",
        &out_path,
        "summary",
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(contains("ALICE PARKER"));

    assert!(out.join("SUM-F2025_AP.pdf").exists());
    assert!(out.join("SUM-F2025_BO.pdf").exists());
}

#[test]
fn clients_due_lists_only_window_activity() {
    let wb = setup_workbook("cli_clients");
    write_default_workbook(&wb);
    write_range(
        &wb,
        "clients",
        "Alice Parker,1,,0,Math,50.00,0.00,Dana Parker!,dana@example.com\n\
         Ben Ootje,2,,0,\"Physics, Chemistry\",45.00,-20.00,Rob Ootje,rob@example.com\n\
         Carla Moss,3,,0,French,40.00,35.00,Iris Moss,iris@example.com\n",
    );
    let wb_path = wb.to_string_lossy().to_string();

    tb().args(["--sheet", &wb_path, "clients", "--due"])
        .assert()
        .success()
        .stdout(contains("Alice Parker"))
        .stdout(contains("Ben Ootje"))
        .stdout(contains("Carla Moss").not());

    // Without --due every client shows up.
    tb().args(["--sheet", &wb_path, "clients"])
        .assert()
        .success()
        .stdout(contains("Carla Moss"));
}

#[test]
fn malformed_session_row_is_fatal() {
    let wb = setup_workbook("cli_malformed");
    let out = temp_out("cli_malformed");
    write_default_workbook(&wb);
    write_range(&wb, "sessions", "Alice Parker,not-a-date,1.0,50.00\n");
    let wb_path = wb.to_string_lossy().to_string();
    let out_path = out.to_string_lossy().to_string();

    tb().args([
        "--sheet",
        &wb_path,
        "--out",
        &out_path,
        "invoice",
        "--dry-run",
    ])
    .assert()
    .failure()
    .stderr(contains("Malformed session row 1"));
}
