use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

const SCRIPT: &str = "\
DEPEND TELNET TCPIP NETCARD
DEPEND TCPIP NETCARD
DEPEND DNS TCPIP NETCARD
DEPEND BROWSER TCPIP HTML
INSTALL NETCARD
INSTALL TELNET
INSTALL foo
REMOVE NETCARD
INSTALL BROWSER
INSTALL DNS
LIST
REMOVE TELNET
REMOVE NETCARD
REMOVE DNS
REMOVE NETCARD
INSTALL NETCARD
REMOVE TCPIP
REMOVE BROWSER
REMOVE TCPIP
LIST
END
";

const EXPECTED: &str = "\
DEPEND TELNET TCPIP NETCARD
DEPEND TCPIP NETCARD
DEPEND DNS TCPIP NETCARD
DEPEND BROWSER TCPIP HTML
INSTALL NETCARD
        NETCARD successfully installed
INSTALL TELNET
        TCPIP successfully installed
        TELNET successfully installed
INSTALL foo
        foo successfully installed
REMOVE NETCARD
        NETCARD is still needed
INSTALL BROWSER
        HTML successfully installed
        BROWSER successfully installed
INSTALL DNS
        DNS successfully installed
LIST
         TELNET
         TCPIP
         NETCARD
         DNS
         BROWSER
         HTML
         foo
REMOVE TELNET
        TELNET successfully removed
REMOVE NETCARD
        NETCARD is still needed
REMOVE DNS
        DNS successfully removed
REMOVE NETCARD
        NETCARD is still needed
INSTALL NETCARD
        NETCARD is already installed
REMOVE TCPIP
        TCPIP is still needed
REMOVE BROWSER
        BROWSER successfully removed
        TCPIP is no longer needed
        TCPIP successfully removed
        HTML is no longer needed
        HTML successfully removed
REMOVE TCPIP
        TCPIP is not installed
LIST
         NETCARD
         foo
END
";

#[test]
fn test_end_to_end_script_to_stdout() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("input.txt");
    std::fs::write(&script, SCRIPT).unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("minipm"));
    cmd.arg("-f").arg(&script);

    cmd.assert().success().stdout(EXPECTED);
}

#[test]
fn test_end_to_end_script_to_output_file() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    std::fs::write(&script, SCRIPT).unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("minipm"));
    cmd.arg("-f").arg(&script).arg("-o").arg(&output);

    cmd.assert().success().stdout("");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn test_json_format_from_env() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("input.txt");
    std::fs::write(&script, "DEPEND A B\nINSTALL A\n").unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("minipm"));
    cmd.arg("-f").arg(&script).arg("-q").env("MINIPM_FORMAT", "json");

    cmd.assert().success().stdout(
        "{\"event\":\"installed\",\"package\":\"B\"}\n{\"event\":\"installed\",\"package\":\"A\"}\n",
    );
}

#[test]
fn test_lines_after_end_are_ignored() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("input.txt");
    std::fs::write(&script, "INSTALL A\nEND\nINSTALL B\nLIST\n").unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("minipm"));
    cmd.arg("-f").arg(&script);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("INSTALL B").not());
}

#[test]
fn test_missing_script_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(cargo::cargo_bin!("minipm"));
    cmd.arg("-f").arg(dir.path().join("nope.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}
