use std::time::{Duration, Instant};

use hexpick_core::status::{Severity, StatusLine};

fn line() -> StatusLine {
    StatusLine::new(Duration::from_millis(3000))
}

#[test]
fn test_starts_ready() {
    let status = line();
    assert_eq!(status.message(), "Ready");
    assert_eq!(status.severity(), Severity::Neutral);
}

#[test]
fn test_success_reverts_after_timeout() {
    let mut status = line();
    let t0 = Instant::now();
    status.set("CSV exported successfully", Severity::Success, t0);

    assert!(!status.tick(t0 + Duration::from_millis(2999)));
    assert_eq!(status.message(), "CSV exported successfully");
    assert_eq!(
        status.remaining(t0 + Duration::from_millis(1000)),
        Some(Duration::from_millis(2000))
    );

    assert!(status.tick(t0 + Duration::from_millis(3000)));
    assert_eq!(status.message(), "Ready");
    assert_eq!(status.severity(), Severity::Neutral);
    assert_eq!(status.remaining(t0), None);
}

#[test]
fn test_errors_stay() {
    let mut status = line();
    let t0 = Instant::now();
    status.set("Invalid CSV file", Severity::Error, t0);
    assert!(!status.tick(t0 + Duration::from_secs(60)));
    assert_eq!(status.message(), "Invalid CSV file");
    assert_eq!(status.remaining(t0), None);
}

#[test]
fn test_newer_message_cancels_revert() {
    let mut status = line();
    let t0 = Instant::now();
    status.set("Loaded 3 colors from CSV", Severity::Success, t0);
    status.set("Picking color for Red. Click on the image to select a color.", Severity::Info, t0);
    assert!(!status.tick(t0 + Duration::from_secs(10)));
    assert_eq!(status.severity(), Severity::Info);
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Success.to_string(), "success");
}
