//! Integration tests for CLI commands.
//!
//! Every test points `--project` at a fresh temp directory so the layered
//! config only sees what the test writes.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkguard(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkguard").unwrap();
    cmd.arg("--no-color")
        .arg("--project")
        .arg(project.path())
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Checksum Command
// ============================================================================

#[test]
fn checksum_text_defaults_to_xmodem() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--text", "Hello World"])
        .assert()
        .success()
        .stdout("0x992A\n");
}

#[test]
fn checksum_hex_input() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--hex", "ABCDEF"])
        .assert()
        .success()
        .stdout("0x21A4\n");
}

#[test]
fn checksum_hex_with_separators() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--hex", "0xAB CD EF 12 34 56 78"])
        .assert()
        .success()
        .stdout("0x948A\n");
}

#[test]
fn checksum_with_presets() {
    let temp = TempDir::new().unwrap();

    for (preset, expected) in [
        ("xmodem", "0x31C3"),
        ("ccitt-false", "0x29B1"),
        ("kermit", "0x2189"),
        ("mcrf4xx", "0x6F91"),
        ("modbus", "0x4B37"),
    ] {
        linkguard(&temp)
            .args(["checksum", "--preset", preset, "--text", "123456789"])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }
}

#[test]
fn checksum_custom_parameters_match_modbus() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args([
            "checksum", "--poly", "0x8005", "--init", "0xFFFF", "--refin", "--refout", "--hex",
            "01030000000A",
        ])
        .assert()
        .success()
        .stdout("0xCDC5\n");
}

#[test]
fn checksum_subrange() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--text", "xxHello World", "--start", "2", "--length", "11"])
        .assert()
        .success()
        .stdout("0x992A\n");

    // Zero length yields the init value.
    linkguard(&temp)
        .args(["checksum", "--preset", "modbus", "--text", "abc", "--length", "0"])
        .assert()
        .success()
        .stdout("0xFFFF\n");
}

#[test]
fn checksum_range_out_of_bounds_fails() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--text", "abc", "--start", "2", "--length", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn checksum_file_input() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("check.bin");
    fs::write(&path, b"123456789").unwrap();

    linkguard(&temp)
        .args(["checksum", "--file", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("0x31C3\n");
}

#[test]
fn checksum_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.bin");

    linkguard(&temp)
        .args(["checksum", "--file", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn checksum_verbose_prints_parameters() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["checksum", "--preset", "kermit", "--text", "123456789", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polynomial: 0x1021"))
        .stdout(predicate::str::contains("RefIn: true"))
        .stdout(predicate::str::contains("0x2189"));
}

#[test]
fn checksum_uses_project_preset() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[crc]\npreset = \"modbus\"\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["checksum", "--text", "123456789"])
        .assert()
        .success()
        .stdout("0x4B37\n");
}

#[test]
fn checksum_flag_overrides_project_preset() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[crc]\npreset = \"modbus\"\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["checksum", "--preset", "xmodem", "--text", "123456789"])
        .assert()
        .success()
        .stdout("0x31C3\n");
}

#[test]
fn checksum_env_overrides_project_preset() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[crc]\npreset = \"modbus\"\n",
    )
    .unwrap();

    linkguard(&temp)
        .env("LINKGUARD_CRC__PRESET", "kermit")
        .args(["checksum", "--text", "123456789"])
        .assert()
        .success()
        .stdout("0x2189\n");
}

// ============================================================================
// Presets Command
// ============================================================================

#[test]
fn presets_lists_and_verifies_all() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("xmodem"))
        .stdout(predicate::str::contains("ccitt-false"))
        .stdout(predicate::str::contains("kermit"))
        .stdout(predicate::str::contains("mcrf4xx"))
        .stdout(predicate::str::contains("modbus"))
        .stdout(predicate::str::contains("0x4B37"))
        .stdout(predicate::str::contains("check values verified"));
}

// ============================================================================
// Stage Command
// ============================================================================

#[test]
fn stage_checksums_each_frame() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.bin");
    fs::write(&path, b"123456789123456789").unwrap();

    linkguard(&temp)
        .args([
            "stage",
            path.to_str().unwrap(),
            "--frame",
            "9",
            "--capacity",
            "16",
            "--chunk",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame       0  offset        0  len     9  crc 0x31C3"))
        .stdout(predicate::str::contains("frame       1  offset        9  len     9  crc 0x31C3"))
        .stdout(predicate::str::contains("Frames: 2"))
        .stdout(predicate::str::contains("Bytes: 18"))
        .stdout(predicate::str::contains("partial").not());
}

#[test]
fn stage_reports_trailing_bytes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.bin");
    fs::write(&path, b"12345678912345").unwrap();

    linkguard(&temp)
        .args(["stage", path.to_str().unwrap(), "--frame", "9", "--preset", "modbus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crc 0x4B37"))
        .stdout(predicate::str::contains("partial     1  offset        9  len     5"))
        .stdout(predicate::str::contains("Frames: 1"))
        .stdout(predicate::str::contains("Trailing: 5 bytes"));
}

#[test]
fn stage_empty_file_has_no_frames() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    linkguard(&temp)
        .args(["stage", path.to_str().unwrap(), "--frame", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames: 0"))
        .stdout(predicate::str::contains("Bytes: 0"));
}

#[test]
fn stage_rejects_frame_larger_than_capacity() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.bin");
    fs::write(&path, b"data").unwrap();

    linkguard(&temp)
        .args([
            "stage",
            path.to_str().unwrap(),
            "--frame",
            "64",
            "--capacity",
            "32",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds buffer capacity"));
}

#[test]
fn stage_rejects_zero_frame() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.bin");
    fs::write(&path, b"data").unwrap();

    linkguard(&temp)
        .args(["stage", path.to_str().unwrap(), "--frame", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn stage_unreservable_capacity_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.bin");
    fs::write(&path, b"data").unwrap();
    let capacity = usize::MAX.to_string();

    linkguard(&temp)
        .args([
            "stage",
            path.to_str().unwrap(),
            "--frame",
            "4",
            "--capacity",
            capacity.as_str(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot reserve storage"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn stage_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.bin");

    linkguard(&temp)
        .args(["stage", path.to_str().unwrap(), "--frame", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

// ============================================================================
// Config Commands
// ============================================================================

#[test]
fn config_show_json_reflects_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[crc]\npreset = \"kermit\"\n\n[buffer]\ncapacity = 512\nchunk_size = 64\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kermit\""))
        .stdout(predicate::str::contains("512"))
        .stdout(predicate::str::contains("64"));
}

#[test]
fn config_show_text_defaults() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preset: xmodem"))
        .stdout(predicate::str::contains("Capacity: 4096"))
        .stdout(predicate::str::contains("Level: info"));
}

#[test]
fn config_show_toml_round_trips_custom_parameters() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[crc.custom]\npolynomial = 32773\ninitial_value = 65535\nfinal_xor = 0\n\
         reflect_input = true\nreflect_output = true\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polynomial = 32773"));

    linkguard(&temp)
        .args(["checksum", "--text", "123456789"])
        .assert()
        .success()
        .stdout("0x4B37\n");
}

#[test]
fn config_validate_without_project_file_warns() {
    let temp = TempDir::new().unwrap();

    linkguard(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No linkguard.toml found"))
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_lists_project_layers() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("linkguard.toml"), "[crc]\npreset = \"kermit\"\n").unwrap();
    fs::write(
        temp.path().join("linkguard.local.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project: "))
        .stdout(predicate::str::contains("local: "))
        .stdout(predicate::str::contains("linkguard.local.toml"))
        .stdout(predicate::str::contains("No linkguard.toml found").not())
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_local_file_alone_still_warns() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.local.toml"),
        "[buffer]\ncapacity = 64\nchunk_size = 16\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local: "))
        .stdout(predicate::str::contains("No linkguard.toml found"));
}

#[test]
fn config_validate_rejects_zero_capacity() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[buffer]\ncapacity = 0\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"))
        .stderr(predicate::str::contains("buffer.capacity must be at least 1"));
}

#[test]
fn config_validate_single_file() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good.toml");
    let bad = temp.path().join("bad.toml");
    fs::write(&good, "[crc]\npreset = \"mcrf4xx\"\n").unwrap();
    fs::write(&bad, "[buffer]\ncapacity = \"lots\"\n").unwrap();

    linkguard(&temp)
        .args(["config", "validate", "--file", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    linkguard(&temp)
        .args(["config", "validate", "--file", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn invalid_project_config_fails_checksum() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("linkguard.toml"),
        "[buffer]\ncapacity = 8\nchunk_size = 16\n",
    )
    .unwrap();

    linkguard(&temp)
        .args(["checksum", "--text", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size"));
}
