use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn default_plan_lists_all_four_quality_tiers() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Current time"))
        .stdout(predicate::str::contains("Minimum"))
        .stdout(predicate::str::contains("Adequate"))
        .stdout(predicate::str::contains("Optimal"))
        .stdout(predicate::str::contains("Extended"))
        .stdout(predicate::str::contains("Easy wake window"));
}

#[test]
fn default_selection_is_five_cycles() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("> 5 cycles  Optimal"));
}

#[test]
fn wake_at_mode_reports_bedtimes() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--wake-at")
        .arg("7:00 AM")
        .arg("--cycles")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wake target       7:00 AM"))
        .stdout(predicate::str::contains("> 6 cycles  Extended"))
        .stdout(predicate::str::contains("bedtime"))
        .stdout(predicate::str::contains("Bedtime window"));
}

#[test]
fn unparsable_wake_at_fails_with_clear_error() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--wake-at")
        .arg("garbage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized clock time"));
}

#[test]
fn unsupported_cycle_count_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--cycles")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported cycle count"));
}

#[test]
fn zero_refresh_interval_is_rejected() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--watch")
        .arg("--refresh-ms")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--refresh-ms"));
}

#[test]
fn json_plan_includes_every_cycle_count() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"sleep\""))
        .stdout(predicate::str::contains("\"cycles\": 3"))
        .stdout(predicate::str::contains("\"cycles\": 6"))
        .stdout(predicate::str::contains("\"quality\": \"Optimal\""))
        .stdout(predicate::str::contains("\"selected\": true"));
}

#[test]
fn watch_mode_exits_after_its_frame_budget() {
    let mut cmd = cargo_bin_cmd!("sleepcycle");
    cmd.arg("--watch")
        .arg("--ticks")
        .arg("2")
        .arg("--refresh-ms")
        .arg("10")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter: next cycle option"));
}
