use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{book, init_db, sched, setup_test_db, temp_out};

#[test]
fn test_book_across_lunch_stores_two_rows() {
    let db_path = setup_test_db("book_split");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "--role", "manager", "book", "2025-05-12", "10:00", "15:00", "--studio", "A",
        ])
        .assert()
        .success()
        .stdout(contains("Booked studio A on 2025-05-12: 10:00-12:00"))
        .stdout(contains("Booked studio A on 2025-05-12: 13:00-15:00"))
        .stdout(contains("Break: 12:00-13:00 (lunch)"))
        .stdout(contains("effective 04h 00m"));

    sched()
        .args(["--db", &db_path, "list", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(contains("before lunch"))
        .stdout(contains("after lunch"))
        .stdout(contains("2 row(s), 04h 00m effective"));
}

#[test]
fn test_book_skip_break_keeps_one_row() {
    let db_path = setup_test_db("book_skip");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "10:00", "15:00", "A", &["--skip-break"]);

    sched()
        .args(["--db", &db_path, "list", "--period", "2025-05-12"])
        .assert()
        .success()
        .stdout(contains("lunch").not())
        .stdout(contains("1 row(s), 05h 00m effective"));
}

#[test]
fn test_book_explicit_dinner_break() {
    let db_path = setup_test_db("book_dinner");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "--role", "manager", "book", "2025-05-12", "16:00", "20:00", "--studio", "B", "--break",
            "dinner",
        ])
        .assert()
        .success()
        .stdout(contains("16:00-18:00"))
        .stdout(contains("19:00-20:00"));
}

#[test]
fn test_book_overlapping_same_studio_fails() {
    let db_path = setup_test_db("book_overlap");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "09:00", "11:00", "A", &[]);

    sched()
        .args([
            "--db", &db_path, "--role", "manager", "book", "2025-05-12", "10:30", "11:30", "--studio", "A",
        ])
        .assert()
        .failure()
        .stderr(contains("Studio A is already booked on 2025-05-12"));

    // Another studio and the adjacent slot are free.
    book(&db_path, "2025-05-12", "10:30", "11:30", "B", &[]);
    book(&db_path, "2025-05-12", "11:00", "12:00", "A", &[]);
}

#[test]
fn test_book_rejects_reversed_interval() {
    let db_path = setup_test_db("book_reversed");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "--role", "manager", "book", "2025-05-12", "15:00", "10:00", "--studio", "A",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid interval"));
}

#[test]
fn test_student_cannot_book() {
    let db_path = setup_test_db("book_student");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "--role", "student", "book", "2025-05-12", "09:00", "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("not allowed to book studios"));
}

#[test]
fn test_unknown_role_falls_back_to_student() {
    let db_path = setup_test_db("book_unknown_role");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "--role", "janitor", "book", "2025-05-12", "09:00", "10:00",
        ])
        .assert()
        .failure()
        .stdout(contains("Unknown role 'janitor'"))
        .stderr(contains("not allowed"));
}

#[test]
fn test_delete_group_removes_both_halves() {
    let db_path = setup_test_db("del_group");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "10:00", "15:00", "A", &[]);

    sched()
        .args([
            "--db", &db_path, "--role", "manager", "del", "2025-05-12", "--group", "1", "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("2 booking row(s) deleted for 2025-05-12"));

    sched()
        .args(["--db", &db_path, "list", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(contains("No bookings for the selected period."));
}

#[test]
fn test_staff_cannot_delete() {
    let db_path = setup_test_db("del_staff");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "09:00", "10:00", "A", &[]);

    sched()
        .args([
            "--db", &db_path, "--role", "staff", "del", "2025-05-12", "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("not allowed to delete bookings"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_bookings");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "10:00", "15:00", "A", &["--title", "portfolio"]);
    book(&db_path, "2025-06-02", "09:00", "10:00", "B", &[]);

    let csv_out = temp_out("export_bookings", "csv");
    sched()
        .args([
            "--db", &db_path, "--role", "manager", "export", "--format", "csv", "--file", &csv_out, "--range", "2025-05",
            "--force",
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("read csv");
    assert!(csv.starts_with(
        "id,date,start,end,studio,title,role,break_kind,segment,group_id,effective_minutes"
    ));
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("2025-05-12,10:00,12:00,A,portfolio,manager,lunch,1,1,120"));

    let json_out = temp_out("export_bookings", "json");
    sched()
        .args([
            "--db", &db_path, "--role", "manager", "export", "--format", "json", "--file", &json_out, "--force",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("valid json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["studio"], "B");
    assert_eq!(rows[2]["break_kind"], "");
}

#[test]
fn test_log_records_bookings() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    book(&db_path, "2025-05-12", "09:00", "10:00", "A", &[]);

    sched()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("2025-05-12 studio A group 1"));
}
