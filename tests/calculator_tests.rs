use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::sched;

#[test]
fn test_check_morning_slot_has_no_conflict() {
    sched()
        .args(["check", "09:00", "11:00"])
        .assert()
        .success()
        .stdout(contains("09:00-11:00 has no break conflict"));
}

#[test]
fn test_check_lunch_conflict_suggests_window() {
    sched()
        .args(["check", "11:30", "12:30"])
        .assert()
        .success()
        .stdout(contains("conflicts with the lunch break"))
        .stdout(contains("suggested break: 12:00-13:00 (60 min)"));
}

#[test]
fn test_check_reports_lunch_before_dinner() {
    sched()
        .args(["check", "11:00", "20:00"])
        .assert()
        .success()
        .stdout(contains("lunch break"))
        .stdout(contains("dinner").not());
}

#[test]
fn test_check_all_reports_both_windows() {
    sched()
        .args(["check", "11:00", "20:00", "--all"])
        .assert()
        .success()
        .stdout(contains("lunch: 12:00-13:00"))
        .stdout(contains("dinner: 18:00-19:00"));
}

#[test]
fn test_check_rejects_malformed_time() {
    sched()
        .args(["check", "9:00", "11:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_split_full_containment() {
    sched()
        .args(["split", "10:00", "15:00"])
        .assert()
        .success()
        .stdout(contains("split around the lunch break"))
        .stdout(contains("10:00-12:00"))
        .stdout(contains("13:00-15:00"))
        .stdout(contains("04h 00m"));
}

#[test]
fn test_split_skipped_break_keeps_interval() {
    sched()
        .args(["split", "10:00", "15:00", "--skip-break"])
        .assert()
        .success()
        .stdout(contains("10:00-15:00 needs no split"))
        .stdout(contains("05h 00m"));
}

#[test]
fn test_split_outside_break() {
    sched()
        .args(["split", "08:00", "11:00"])
        .assert()
        .success()
        .stdout(contains("needs no split"));
}

#[test]
fn test_duration_partial_overlap() {
    sched()
        .args(["duration", "12:30", "14:00", "--break", "lunch"])
        .assert()
        .success()
        .stdout(contains("90 min"))
        .stdout(contains("60 min (01h 00m)"));
}

#[test]
fn test_duration_without_break_is_raw_total() {
    sched()
        .args(["duration", "10:00", "15:00"])
        .assert()
        .success()
        .stdout(contains("300 min (05h 00m)"));
}
