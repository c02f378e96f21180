use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const RULES: &str = "// version: 7\nspawn_rate=3\nboss=enabled\n";

fn configrules() -> Command {
    let mut cmd = Command::cargo_bin("configrules").unwrap();
    cmd.env_remove("CONFIGRULES_PASSWORD").env_remove("CONFIGRULES_LOG");
    cmd
}

fn write_rules(dir: &Path) -> std::path::PathBuf {
    let src = dir.join("rules.txt");
    fs::write(&src, RULES).unwrap();
    src
}

#[test]
fn test_no_args_prints_usage_and_succeeds() {
    configrules()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[cfg(unix)]
#[test]
fn test_unknown_op_exits_minus_one() {
    configrules()
        .args(["x", "a", "b"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Unknown operation: x"));
}

#[test]
fn test_known_op_without_paths_is_usage_error() {
    configrules().arg("c").assert().code(2);
}

#[test]
fn test_compress_then_decompress() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");
    let out = temp.path().join("rules.out");

    configrules()
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoded").and(predicate::str::contains("version 7")));

    let bytes = fs::read(&packed).unwrap();
    assert_eq!(&bytes[..2], &[0x39, 0xD8]);

    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoded"));

    assert_eq!(fs::read_to_string(&out).unwrap(), RULES);
}

#[test]
fn test_password_round_trip_and_wrong_password() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");
    let out = temp.path().join("rules.out");

    configrules()
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .arg("s3cret")
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypted"));

    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .arg("nope")
        .assert()
        .code(predicate::in_iter([5, 6]))
        .stdout(predicate::str::contains("Error"));
    assert!(!out.exists());

    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .arg("s3cret")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), RULES);
}

#[test]
fn test_password_from_environment() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");
    let out = temp.path().join("rules.out");

    configrules()
        .env("CONFIGRULES_PASSWORD", "from-env")
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .assert()
        .success();

    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .arg("from-env")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), RULES);
}

#[test]
fn test_missing_version_marker_is_format_error() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("plain.txt");
    fs::write(&src, "no marker\n").unwrap();

    configrules()
        .arg("c")
        .arg(&src)
        .arg(temp.path().join("plain.bin"))
        .assert()
        .code(4)
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_missing_input_is_read_error() {
    let temp = tempdir().unwrap();

    configrules()
        .arg("d")
        .arg(temp.path().join("absent.bin"))
        .arg(temp.path().join("out.txt"))
        .assert()
        .code(3)
        .stdout(predicate::str::contains("absent.bin"));
}

#[test]
fn test_bad_magic_is_format_error() {
    let temp = tempdir().unwrap();
    let bogus = temp.path().join("bogus.bin");
    fs::write(&bogus, b"PK\x03\x04 not a container").unwrap();

    configrules()
        .arg("d")
        .arg(&bogus)
        .arg(temp.path().join("out.txt"))
        .assert()
        .code(4)
        .stdout(predicate::str::contains("invalid magic"));
}

#[test]
fn test_inspect_prints_header_json() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules().arg("c").arg(&src).arg(&packed).assert().success();

    configrules()
        .arg("i")
        .arg(&packed)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"version\": 7")
                .and(predicate::str::contains("\"magic\": \"39d8\""))
                .and(predicate::str::contains(format!("\"uncompressed_size\": {}", RULES.len()))),
        );
}

#[test]
fn test_level_flag_is_validated() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules()
        .args(["-l", "12", "c"])
        .arg(&src)
        .arg(&packed)
        .assert()
        .failure();

    configrules()
        .args(["-l", "0", "c"])
        .arg(&src)
        .arg(&packed)
        .assert()
        .success();
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules()
        .arg("-v")
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded container"))
        .stdout(predicate::str::contains("encoded container").not());
}

#[test]
fn test_password_that_looks_like_a_flag() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");
    let out = temp.path().join("rules.out");

    configrules()
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(", encrypted,"));

    // Without the password the payload is not a zlib stream.
    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .assert()
        .code(6);
    assert!(!out.exists());

    configrules()
        .arg("d")
        .arg(&packed)
        .arg(&out)
        .arg("-v")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), RULES);
}

#[test]
fn test_password_starting_with_h_is_not_help() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules()
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .arg("-hunter2")
        .assert()
        .success()
        .stdout(predicate::str::contains(", encrypted,").and(predicate::str::contains("Usage").not()));
    assert!(packed.exists());
}

#[test]
fn test_json_summary() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules()
        .arg("--json")
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .arg("pw")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"direction\": \"encode\"")
                .and(predicate::str::contains("\"encrypted\": true"))
                .and(predicate::str::contains("\"version\": 7")),
        );
}

#[test]
fn test_log_env_takes_precedence_over_flags() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());

    configrules()
        .env("CONFIGRULES_LOG", "debug")
        .arg("c")
        .arg(&src)
        .arg(temp.path().join("a.bin"))
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded container"));

    configrules()
        .env("CONFIGRULES_LOG", "off")
        .arg("-v")
        .arg("c")
        .arg(&src)
        .arg(temp.path().join("b.bin"))
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded container").not());
}

#[test]
fn test_malformed_log_env_falls_back_with_warning() {
    let temp = tempdir().unwrap();
    let src = write_rules(temp.path());
    let packed = temp.path().join("rules.bin");

    configrules()
        .env("CONFIGRULES_LOG", "configrules=loud")
        .arg("c")
        .arg(&src)
        .arg(&packed)
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid CONFIGRULES_LOG directive"));
    assert!(packed.exists());
}
