use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_demo_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("environment=DEV"))
        // Accepted payments are processed exactly once each
        .stdout(predicate::str::contains("processing card payment amount=100").count(1))
        .stdout(predicate::str::contains("processing crypto payment amount=500").count(1))
        // Rejected payments never reach the processing step
        .stdout(predicate::str::contains("validation rejected").count(2))
        .stdout(predicate::str::contains("processing card payment amount=-10").not())
        .stdout(predicate::str::contains("processing crypto payment amount=15000").not());

    Ok(())
}

#[test]
fn test_batch_fixture_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("tests/fixtures/payments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("batch complete accepted=3 rejected=1"));

    Ok(())
}
