#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rci() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed data used by most CLI tests: two events, five people.
/// Same shape as the JSON the `load` command consumes in production.
pub const FIXTURE: &str = r#"{
  "communities": [
    { "id": "tech-conference", "name": "Tech Conference 2023" },
    { "id": "meetup-night", "name": "Meetup Night" }
  ],
  "people": [
    { "id": "amy-perlman", "firstName": "Amy", "lastName": "Perlman", "companyName": "Green Group", "title": "CEO", "community": "Tech Conference 2023" },
    { "id": "bob-tate", "firstName": "Bob", "lastName": "Tate", "companyName": "Green Group", "title": "Engineer", "community": "Tech Conference 2023" },
    { "id": "carla-diaz", "firstName": "Carla", "lastName": "Diaz", "companyName": "Acme Labs", "title": "CTO", "community": "Tech Conference 2023" },
    { "id": "dan-oreilly", "firstName": "Dan", "lastName": "O'Reilly", "community": "Tech Conference 2023" },
    { "id": "eva-marsh", "firstName": "Eva", "lastName": "Marsh", "companyName": "Labs", "title": "Designer", "community": "Meetup Night" }
  ]
}"#;

/// Write the seed fixture to a unique temp file, returning its path
pub fn write_fixture(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, FIXTURE).expect("write fixture");
    p
}

/// Initialize the DB and load the seed fixture
pub fn init_and_load(db_path: &str, fixture: &str) {
    rci()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rci()
        .args(["--db", db_path, "--test", "load", fixture])
        .assert()
        .success();
}
