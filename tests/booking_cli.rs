//! Integration tests driving the booking loop through piped stdin

use assert_cmd::Command;
use once_cell::sync::Lazy;
use predicates::prelude::*;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// Empty home directory so a developer's own config file is never read
static EMPTY_HOME: Lazy<TempDir> = Lazy::new(|| TempDir::new().unwrap());

/// Binary with color off and no inherited configuration
fn booking_cmd() -> Command {
    booking_cmd_in(EMPTY_HOME.path())
}

#[allow(deprecated)]
fn booking_cmd_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("conf-booking").unwrap();
    cmd.arg("--no-color")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CONF_BOOKING_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_describes_tool() {
    booking_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_booking_remaining_tickets_sells_out() {
    booking_cmd()
        .args(["book", "--tickets", "2"])
        .write_stdin("Jane Doe jane@x.co 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Go Conference booking app"))
        .stdout(predicate::str::contains(
            "We have a total of 2 tickets and 2 are still available.",
        ))
        .stdout(predicate::str::contains(
            "Thank you Jane Doe for booking 2 tickets. You will receive a confirmation email at jane@x.co.",
        ))
        .stdout(predicate::str::contains("0 tickets remaining for Go Conference"))
        .stdout(predicate::str::contains(
            "Our conference is booked out. Come back next year.",
        ));
}

#[test]
fn test_rejected_request_leaves_inventory() {
    booking_cmd()
        .args(["book", "--tickets", "3", "--name", "RustConf"])
        .write_stdin("Jane Doe jane@x.co 5\nJane Doe jane@x.co 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please fix the following errors"))
        .stdout(predicate::str::contains("Not enough tickets available"))
        .stdout(predicate::str::contains("0 tickets remaining for RustConf"))
        .stdout(predicate::str::contains("booked out"));
}

#[test]
fn test_each_failed_rule_is_listed() {
    booking_cmd()
        .args(["book", "--tickets", "5"])
        .write_stdin("J D bad-email 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("First name must be at least 2 characters"))
        .stdout(predicate::str::contains("Last name must be at least 2 characters"))
        .stdout(predicate::str::contains("Please enter a valid email address"))
        .stdout(predicate::str::contains("Number of tickets must be greater than 0"))
        .stdout(predicate::str::contains("5 tickets remain unbooked"));
}

#[test]
fn test_input_closing_ends_session() {
    booking_cmd()
        .write_stdin("Jane Doe jane@x.co 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The first names of bookings are: Jane"))
        .stdout(predicate::str::contains("49 tickets remain unbooked"))
        .stdout(predicate::str::contains("booked out").not());
}

#[test]
fn test_drained_confirmation_is_printed() {
    booking_cmd()
        .args(["book", "--tickets", "1"])
        .env("CONF_BOOKING__NOTIFICATION__DELAY_MS", "10")
        .env("CONF_BOOKING__NOTIFICATION__DRAIN_ON_EXIT", "true")
        .write_stdin("Jane Doe jane@x.co 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sending 1 tickets for Jane Doe to email address jane@x.co",
        ));
}

#[test]
fn test_pending_confirmations_are_dropped_by_default() {
    booking_cmd()
        .args(["book", "--tickets", "1"])
        .write_stdin("Jane Doe jane@x.co 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sending").not());
}

#[test]
fn test_summary_lists_attendees() {
    booking_cmd()
        .args(["book", "--tickets", "4", "--summary"])
        .write_stdin("Jane Doe jane@x.co 1\nJohn Roe john@x.co 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total bookings: 2"))
        .stdout(predicate::str::contains("1. Jane Doe (1 tickets) booked at"))
        .stdout(predicate::str::contains("2. John Roe (3 tickets) booked at"));
}

#[test]
fn test_invalid_utf8_name_is_rejected_not_fatal() {
    booking_cmd()
        .args(["book", "--tickets", "1"])
        .write_stdin(&b"J\xffne Doe jane@x.co 1\nJane Doe jane@x.co 1\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("First name must be at least 2 characters"))
        .stdout(predicate::str::contains("The first names of bookings are: Jane"))
        .stdout(predicate::str::contains("booked out"));
}

#[test]
fn test_json_output_is_one_event_per_line() {
    let output = booking_cmd()
        .args(["--json", "book", "--tickets", "2"])
        .write_stdin("Jane Doe jane@x.co 2\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let events: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events, vec!["welcome", "booked", "sold_out"]);
}

#[test]
fn test_zero_capacity_is_config_error() {
    booking_cmd()
        .args(["book", "--tickets", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("booking.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[conference]\nname = \"EuroRust\"\ntickets = 7").unwrap();

    booking_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"EuroRust\""))
        .stdout(predicate::str::contains("\"tickets\":7"));
}

#[test]
fn test_defaults_ignore_outside_config() {
    booking_cmd()
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"Go Conference\""))
        .stdout(predicate::str::contains("\"tickets\":50"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_file_comes_from_home() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("conf-booking");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[conference]\ntickets = 9\n").unwrap();

    booking_cmd_in(home.path())
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tickets\":9"));
}

#[test]
fn test_missing_config_file_fails() {
    booking_cmd()
        .args(["--config", "/nonexistent/booking.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
