use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_submission_row_is_skipped() {
    let mut submissions = NamedTempFile::new().unwrap();
    writeln!(submissions, "id, receipt_number, amount, image_url, date").unwrap();
    writeln!(
        submissions,
        "A, REC001, not-a-number, https://example.com/receipt1.jpg, 2024-02-15"
    )
    .unwrap();
    writeln!(
        submissions,
        "B, REC002, 150000, https://example.com/receipt2.jpg, 2024-02-16"
    )
    .unwrap();

    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "approve, B, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    // The bad row is reported, the rest of the stream is processed.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading submission"))
        .stdout(predicate::str::contains("B,REC002,150000,approved"));
}

#[test]
fn test_unknown_action_kind_is_reported() {
    let mut submissions = NamedTempFile::new().unwrap();
    writeln!(submissions, "id, receipt_number, amount, image_url, date").unwrap();
    writeln!(
        submissions,
        "A, REC001, 100000, https://example.com/receipt1.jpg, 2024-02-15"
    )
    .unwrap();

    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "escalate, A, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading action"))
        .stdout(predicate::str::contains("A,REC001,100000,pending"));
}

#[test]
fn test_negative_amount_is_rejected_at_the_boundary() {
    let mut submissions = NamedTempFile::new().unwrap();
    writeln!(submissions, "id, receipt_number, amount, image_url, date").unwrap();
    writeln!(
        submissions,
        "A, REC001, -100000, https://example.com/receipt1.jpg, 2024-02-15"
    )
    .unwrap();

    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading submission"))
        .stdout(predicate::str::contains("REC001").not());
}

#[test]
fn test_empty_streams_produce_empty_output() {
    let mut submissions = NamedTempFile::new().unwrap();
    writeln!(submissions, "id, receipt_number, amount, image_url, date").unwrap();

    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_garbage_gesture_row_is_reported() {
    let mut trace = NamedTempFile::new().unwrap();
    writeln!(trace, "event, image, scale, dx, dy").unwrap();
    writeln!(trace, "wobble, , , , ").unwrap();
    writeln!(trace, "open, receipt.png, , , ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("preview").arg(trace.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading gesture event"))
        .stdout(predicate::str::contains("true,1,0,0"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("preview").arg("does-not-exist.csv");

    cmd.assert().failure();
}
