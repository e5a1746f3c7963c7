use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn prints_simplified_text() {
    let mut cmd = cargo_bin_cmd!("leicht");
    cmd.arg("Es waren 4567 Teilnehmer");

    cmd.assert()
        .success()
        .stdout("Simplified Text: Es waren etwa 5000 Teilnehmer\n");
}

#[test]
fn keeps_dates() {
    let mut cmd = cargo_bin_cmd!("leicht");
    cmd.arg("Am 3. Mai 2020 kamen 25 Prozent");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Am 3. Mai 2020 kamen jeder Vierte"));
}

#[test]
fn missing_sentence_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("leicht");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unparsable_number_fails() {
    let mut cmd = cargo_bin_cmd!("leicht");
    cmd.arg("Die Zahlen 1 2 und 3");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("simplifying text"));
}

#[test]
fn verbose_logs_passes() {
    let mut cmd = cargo_bin_cmd!("leicht");
    cmd.args(["-vv", "Es gab 15000 Besucher"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("after numbers"));
}
