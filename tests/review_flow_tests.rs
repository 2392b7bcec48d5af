use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn seed_submissions() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id, receipt_number, amount, image_url, date").unwrap();
    writeln!(
        file,
        "A, REC001, 100000, https://example.com/receipt1.jpg, 2024-02-15"
    )
    .unwrap();
    writeln!(
        file,
        "B, REC002, 150000, https://example.com/receipt2.jpg, 2024-02-16"
    )
    .unwrap();
    file
}

#[test]
fn test_approve_and_reject_flow() {
    let submissions = seed_submissions();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "approve, A, ").unwrap();
    writeln!(actions, "reject, B, Montant incorrect").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    // Both submissions resolved and archived with their outcomes.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "A,REC001,100000,approved,https://example.com/receipt1.jpg,2024-02-15,",
        ))
        .stdout(predicate::str::contains(
            "B,REC002,150000,rejected,https://example.com/receipt2.jpg,2024-02-16,Montant incorrect",
        ));
}

#[test]
fn test_reject_with_empty_reason_is_refused() {
    let submissions = seed_submissions();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "reject, A, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    // Confirm is refused; the submission stays pending.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A,REC001,100000,pending,"))
        .stderr(predicate::str::contains("Precondition error"));
}

#[test]
fn test_unknown_id_is_ignored() {
    let submissions = seed_submissions();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "approve, Z, ").unwrap();
    writeln!(actions, "reject, Y, Montant incorrect").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A,REC001,100000,pending,"))
        .stdout(predicate::str::contains("B,REC002,150000,pending,"))
        .stdout(predicate::str::contains("approved").not())
        .stdout(predicate::str::contains("rejected").not());
}

#[test]
fn test_double_approve_archives_once() {
    let submissions = seed_submissions();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "approve, A, ").unwrap();
    writeln!(actions, "approve, A, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("A,REC001").count(), 1);
}

#[test]
fn test_custom_reasons_file() {
    let submissions = seed_submissions();
    let mut reasons = NamedTempFile::new().unwrap();
    write!(reasons, r#"["Paiement hors délai"]"#).unwrap();

    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "reject, A, Paiement hors délai").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review")
        .arg(submissions.path())
        .arg(actions.path())
        .arg("--reasons")
        .arg(reasons.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "A,REC001,100000,rejected,https://example.com/receipt1.jpg,2024-02-15,Paiement hors délai",
    ));
}

#[test]
fn test_output_header() {
    let submissions = seed_submissions();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, "action, id, reason").unwrap();
    writeln!(actions, "approve, A, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("scolarite"));
    cmd.arg("review").arg(submissions.path()).arg(actions.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "id,receipt_number,amount,status,image_url,date,rejection_reason",
    ));
}
