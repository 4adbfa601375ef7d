//! End-to-end CLI tests on pre-extracted text inputs.

use assert_cmd::Command;
use predicates::prelude::*;

const EXPEDIA_TEXT: &str = "\
Expedia Partner Central\n\
Guest: Tran Thi Mai\n\
Reservation ID: 2307501514\n\
Guest has PRE-PAID\n\
Booked on: Nov 2, 2025\n\
Check-In Check-Out Adults Kids/Ages\n\
Nov 12, 2025  Nov 14, 2025  3  0\n\
Total Booking Amount: 2,400,000 VND\n";

#[test]
fn test_process_writes_report_pair() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("booking.txt");
    std::fs::write(&input, EXPEDIA_TEXT).unwrap();

    Command::cargo_bin("otax")
        .unwrap()
        .args(["process", input.to_str().unwrap()])
        .assert()
        .success();

    let txt = std::fs::read_to_string(dir.path().join("booking_extracted.txt")).unwrap();
    assert!(txt.contains("BookingID: 2307501514"));
    assert!(txt.contains("Check in: 11/12/2025"));
    assert!(txt.contains("--- Billing Details: ---"));

    let html = std::fs::read_to_string(dir.path().join("booking_report.html")).unwrap();
    assert!(html.contains("<title>2307501514-report</title>"));
}

#[test]
fn test_process_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("booking.txt");
    std::fs::write(&input, EXPEDIA_TEXT).unwrap();

    Command::cargo_bin("otax")
        .unwrap()
        .args(["process", "--json", "--no-reports", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"BookingID\": \"2307501514\""));
}

#[test]
fn test_unrecognized_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("other.txt");
    std::fs::write(&input, "Booking.com confirmation 42\n").unwrap();

    Command::cargo_bin("otax")
        .unwrap()
        .args(["process", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot identify OTA source"));
}
