use rust_decimal_macros::dec;
use tutorbill::core::{billing, parse, select};
use tutorbill::errors::AppError;
use tutorbill::models::{CutoffWindow, Payment, Session};
use tutorbill::render::document::{
    build_invoice_document, initials, semester_code,
};
use tutorbill::utils::date::serial_to_datetime;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn session(name: &str, serial: f64, hours: &str, fee: &str) -> Session {
    Session {
        client_name: name.to_string(),
        date: serial_to_datetime(serial).unwrap(),
        hours: hours.parse().unwrap(),
        fee: fee.parse().unwrap(),
    }
}

fn payment(name: &str, serial: f64, amount: &str) -> Payment {
    Payment {
        client_name: name.to_string(),
        date: serial_to_datetime(serial).unwrap(),
        amount: amount.parse().unwrap(),
    }
}

fn window(start: f64, end: f64) -> CutoffWindow {
    CutoffWindow::new(
        serial_to_datetime(start).unwrap(),
        serial_to_datetime(end).unwrap(),
    )
    .unwrap()
}

#[test]
fn serial_zero_is_the_epoch() {
    let d = serial_to_datetime(0.0).unwrap();
    assert_eq!(d.to_string(), "1899-12-30 00:00:00");
}

#[test]
fn serial_fraction_is_kept_as_time_of_day() {
    let whole = serial_to_datetime(45001.0).unwrap();
    let half = serial_to_datetime(45001.5).unwrap();
    assert_eq!(half.date(), whole.date());
    assert_eq!(half.time().to_string(), "12:00:00");
}

#[test]
fn negative_serial_is_rejected() {
    assert!(serial_to_datetime(-1.0).is_none());
}

#[test]
fn parse_session_coerces_fields() {
    let s = parse::parse_session(&row(&["Alice Parker", "45001", "1.5", "75.00"]), 0).unwrap();
    assert_eq!(s.client_name, "Alice Parker");
    assert_eq!(s.hours, dec!(1.5));
    assert_eq!(s.fee, dec!(75.00));
}

#[test]
fn parse_session_rejects_non_numeric_serial() {
    let err = parse::parse_session(&row(&["Alice Parker", "soon", "1.5", "75.00"]), 4)
        .unwrap_err();
    match err {
        AppError::MalformedRow { kind, row, .. } => {
            assert_eq!(kind, "session");
            assert_eq!(row, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_client_reads_all_nine_columns() {
    let c = parse::parse_client(
        &row(&[
            "Alice Parker",
            "3",
            "note",
            "12.5",
            "Math",
            "50.00",
            "-10.00",
            "Dana Parker!",
            "dana@example.com",
        ]),
        0,
    )
    .unwrap();
    assert_eq!(c.sequence_number, 3);
    assert_eq!(c.hourly_rate, dec!(50.00));
    assert_eq!(c.running_tab, dec!(-10.00));
    assert!(c.payer_has_marker());
    assert_eq!(c.payer_display_name(), "Dana Parker");
    assert_eq!(c.payer_first_name(), "Dana");
}

#[test]
fn parse_client_rejects_short_rows() {
    let err = parse::parse_client(&row(&["Alice Parker", "3"]), 1).unwrap_err();
    assert!(matches!(err, AppError::MalformedRow { kind: "client", .. }));
}

#[test]
fn cutoff_rows_must_be_ordered() {
    let err =
        parse::parse_cutoffs(&[row(&["45014"]), row(&["45000"])]).unwrap_err();
    assert!(matches!(err, AppError::Window(_)));
}

#[test]
fn window_is_half_open() {
    let w = window(45000.0, 45014.0);
    assert!(w.contains(serial_to_datetime(45000.0).unwrap()));
    assert!(w.contains(serial_to_datetime(45013.0).unwrap()));
    assert!(!w.contains(serial_to_datetime(45014.0).unwrap()));
    assert!(!w.contains(serial_to_datetime(44990.0).unwrap()));
    assert!(w.precedes(serial_to_datetime(44990.0).unwrap()));
}

#[test]
fn window_scenario_selects_and_totals() {
    let sessions = vec![
        session("A", 45001.0, "1.0", "50.00"),
        session("A", 45013.0, "1.5", "75.00"),
        session("A", 44990.0, "1.0", "50.00"),
    ];
    let w = window(45000.0, 45014.0);

    let current = select::in_window(&sessions, &w);
    assert_eq!(current.len(), 2);
    assert_eq!(select::past(&sessions, &w).len(), 1);

    let totals = billing::invoice_totals(&current, dec!(0));
    assert_eq!(totals.session_total, dec!(125.00));
    assert_eq!(totals.total_hours, dec!(2.5));
    assert_eq!(totals.session_count, 2);
}

#[test]
fn sessions_for_is_exact_and_ordered() {
    let sessions = vec![
        session("Alice", 45001.0, "1.0", "50.00"),
        session("alice", 45002.0, "1.0", "50.00"),
        session("Alice", 45003.0, "2.0", "100.00"),
    ];
    let mine = select::sessions_for("Alice", &sessions);
    assert_eq!(mine.len(), 2);
    assert!(mine[0].date < mine[1].date);
}

#[test]
fn payments_for_is_exact_and_ordered() {
    let payments = vec![
        payment("Alice", 45010.0, "100.00"),
        payment("alice", 45005.0, "60.00"),
        payment("Alice", 45005.0, "37.50"),
    ];
    let mine = select::payments_for("Alice", &payments);
    assert_eq!(mine.len(), 2);
    // Source order, not date order.
    assert_eq!(mine[0].amount, dec!(100.00));
    assert_eq!(mine[1].amount, dec!(37.50));
}

#[test]
fn repeated_quarter_hour_sums_stay_exact() {
    let sessions: Vec<Session> = (0..1000)
        .map(|i| session("A", 45001.0 + (i % 10) as f64, "0.25", "12.34"))
        .collect();
    let totals = billing::invoice_totals(&sessions, dec!(0));
    assert_eq!(totals.total_hours, dec!(250));
    assert_eq!(totals.session_total, dec!(12340.00));
}

#[test]
fn total_due_adds_the_tab_in_both_signs() {
    let sessions = vec![session("A", 45001.0, "1.0", "50.00")];
    assert_eq!(
        billing::invoice_totals(&sessions, dec!(25.00)).total_due,
        dec!(75.00)
    );
    assert_eq!(
        billing::invoice_totals(&sessions, dec!(-80.00)).total_due,
        dec!(-30.00)
    );
}

#[test]
fn zero_sessions_is_just_the_tab() {
    let totals = billing::invoice_totals(&[], dec!(-15.00));
    assert_eq!(totals.session_count, 0);
    assert_eq!(totals.total_hours, dec!(0));
    assert_eq!(totals.session_total, dec!(0));
    assert_eq!(totals.total_due, dec!(-15.00));
}

#[test]
fn payment_totals_are_independent() {
    let payments = vec![
        payment("A", 45005.0, "100.00"),
        payment("A", 45010.0, "37.50"),
    ];
    let totals = billing::payment_totals(&payments);
    assert_eq!(totals.payment_count, 2);
    assert_eq!(totals.payment_total, dec!(137.50));
}

#[test]
fn active_clients_are_discovered_sorted() {
    let sessions = vec![
        session("Zoe", 45001.0, "1.0", "50.00"),
        session("Alice", 45002.0, "1.0", "50.00"),
        session("Zoe", 45003.0, "1.0", "50.00"),
        session("Old Timer", 44000.0, "1.0", "50.00"),
    ];
    let w = window(45000.0, 45014.0);
    assert_eq!(
        select::clients_active_in_window(&sessions, &w),
        vec!["Alice".to_string(), "Zoe".to_string()]
    );
}

#[test]
fn unknown_client_is_reported_by_name() {
    let err = select::find_client("Nobody", &[]).unwrap_err();
    match err {
        AppError::ClientNotFound(name) => assert_eq!(name, "Nobody"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn initials_take_the_first_letter_of_each_token() {
    assert_eq!(initials("Jane Q. Public"), "JQP");
    assert_eq!(initials("Cher"), "C");
}

#[test]
fn semester_code_shortens_the_title() {
    assert_eq!(semester_code("Fall 2025"), "F2025");
    assert_eq!(semester_code("Spring 2026"), "S2026");
}

#[test]
fn invoice_filename_encodes_tag_number_and_initials() {
    let client = parse::parse_client(
        &row(&[
            "Jane Q. Public",
            "1",
            "",
            "0",
            "Math",
            "50.00",
            "0.00",
            "Pat Public",
            "pat@example.com",
        ]),
        0,
    )
    .unwrap();
    let totals = billing::invoice_totals(&[], client.running_tab);
    let doc = build_invoice_document(&client, "0042", &[], totals);
    assert_eq!(doc.filename, "INV-0042_JQP.pdf");
}
