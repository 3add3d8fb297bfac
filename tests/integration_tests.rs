use predicates::str::contains;
use std::fs;

mod common;
use common::{init_and_load, rci, setup_test_db, write_fixture};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rci()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_load_and_list_events() {
    let db_path = setup_test_db("load_and_list_events");
    let fixture = write_fixture("load_and_list_events");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "events"])
        .assert()
        .success()
        .stdout(contains("Tech Conference 2023"))
        .stdout(contains("Meetup Night"))
        .stdout(contains("tech-conference"));
}

#[test]
fn test_load_replace_clears_previous_rows() {
    let db_path = setup_test_db("load_replace");
    let fixture = write_fixture("load_replace");
    init_and_load(&db_path, &fixture);

    // a second plain load would collide on ids; --replace starts clean
    rci()
        .args(["--db", &db_path, "--test", "load", &fixture, "--replace"])
        .assert()
        .success()
        .stdout(contains("Loaded 2 events and 5 attendees"));
}

#[test]
fn test_roster_shows_not_arrived() {
    let db_path = setup_test_db("roster_not_arrived");
    let fixture = write_fixture("roster_not_arrived");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "roster", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("Amy Perlman"))
        .stdout(contains("not arrived"))
        .stdout(contains("People in the event right now: 0"))
        .stdout(contains("People not checked-in yet: 4"))
        .stdout(contains("People by company in the event right now: none"));
}

#[test]
fn test_checkin_marks_present() {
    let db_path = setup_test_db("checkin_marks_present");
    let fixture = write_fixture("checkin_marks_present");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkin", "amy-perlman"])
        .assert()
        .success()
        .stdout(contains("Amy Perlman checked in at"));

    rci()
        .args(["--db", &db_path, "--test", "roster", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("present"))
        .stdout(contains("People in the event right now: 1"))
        .stdout(contains("Green Group (1)"));
}

#[test]
fn test_immediate_checkout_is_gated() {
    let db_path = setup_test_db("immediate_checkout_gated");
    let fixture = write_fixture("immediate_checkout_gated");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkin", "amy-perlman"])
        .assert()
        .success();

    // Within the 5s grace window the checkout is withheld
    rci()
        .args(["--db", &db_path, "--test", "checkout", "amy-perlman"])
        .assert()
        .success()
        .stdout(contains("grace period"));

    rci()
        .args(["--db", &db_path, "--test", "roster", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("People in the event right now: 1"));
}

#[test]
fn test_forced_checkout_departs() {
    let db_path = setup_test_db("forced_checkout_departs");
    let fixture = write_fixture("forced_checkout_departs");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkin", "amy-perlman"])
        .assert()
        .success();

    rci()
        .args(["--db", &db_path, "--test", "checkout", "amy-perlman", "--force"])
        .assert()
        .success()
        .stdout(contains("Amy Perlman checked out at"));

    rci()
        .args(["--db", &db_path, "--test", "roster", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("departed"))
        .stdout(contains("People in the event right now: 0"));
}

#[test]
fn test_checkout_without_checkin_fails() {
    let db_path = setup_test_db("checkout_without_checkin");
    let fixture = write_fixture("checkout_without_checkin");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkout", "bob-tate", "--force"])
        .assert()
        .failure()
        .stderr(contains("never checked in"));
}

#[test]
fn test_checkin_unknown_attendee_fails() {
    let db_path = setup_test_db("checkin_unknown");
    let fixture = write_fixture("checkin_unknown");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkin", "nobody"])
        .assert()
        .failure()
        .stderr(contains("No attendee found with id 'nobody'"));
}

#[test]
fn test_summary_counts_and_grouping() {
    let db_path = setup_test_db("summary_counts");
    let fixture = write_fixture("summary_counts");
    init_and_load(&db_path, &fixture);

    for id in ["amy-perlman", "bob-tate", "carla-diaz"] {
        rci()
            .args(["--db", &db_path, "--test", "checkin", id])
            .assert()
            .success();
    }
    rci()
        .args(["--db", &db_path, "--test", "checkout", "carla-diaz", "--force"])
        .assert()
        .success();

    rci()
        .args(["--db", &db_path, "--test", "summary", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("People in the event right now:"))
        .stdout(contains("Green Group (2)"));

    // the roster footer prints the same aggregates uncolored
    rci()
        .args(["--db", &db_path, "--test", "roster", "tech-conference"])
        .assert()
        .success()
        .stdout(contains("People in the event right now: 2"))
        .stdout(contains("People not checked-in yet: 1"));
}

#[test]
fn test_roster_without_event_selection_fails() {
    let db_path = setup_test_db("roster_no_event");
    let fixture = write_fixture("roster_no_event");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "roster"])
        .assert()
        .failure()
        .stderr(contains("No event selected"));
}

#[test]
fn test_roster_unknown_event_fails() {
    let db_path = setup_test_db("roster_unknown_event");
    let fixture = write_fixture("roster_unknown_event");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "roster", "missing-event"])
        .assert()
        .failure()
        .stderr(contains("No event found with id 'missing-event'"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    let fixture = write_fixture("internal_log");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "checkin", "amy-perlman"])
        .assert()
        .success();

    rci()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("load"))
        .stdout(contains("checkin"))
        .stdout(contains("Amy Perlman checked in"));
}

#[test]
fn test_db_info_reports_totals() {
    let db_path = setup_test_db("db_info");
    let fixture = write_fixture("db_info");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Events:"))
        .stdout(contains("Attendees:"));
}

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");
    let fixture = write_fixture("db_check");
    init_and_load(&db_path, &fixture);

    rci()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}
