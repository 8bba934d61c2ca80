use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn dotdash() -> Command {
    Command::cargo_bin("dotdash").unwrap()
}

#[test]
fn test_encode_argument() {
    dotdash()
        .arg("encode")
        .arg("sos")
        .assert()
        .success()
        .stdout("... --- ...\n");
}

#[test]
fn test_decode_argument() {
    dotdash()
        .arg("decode")
        .arg("... --- ...")
        .assert()
        .success()
        .stdout("SOS\n");
}

#[test]
fn test_decode_leading_dash() {
    dotdash()
        .args(["decode", "--", "- . ... -"])
        .assert()
        .success()
        .stdout("TEST\n");
}

#[test]
fn test_encode_stdin() {
    dotdash()
        .arg("encode")
        .write_stdin("sos\n")
        .assert()
        .success()
        .stdout("... --- ...\n");
}

#[test]
fn test_convert_stdin_text() {
    dotdash()
        .arg("convert")
        .write_stdin("  SOS  \n")
        .assert()
        .success()
        .stdout("... --- ...\n");
}

#[test]
fn test_convert_stdin_code() {
    dotdash()
        .arg("convert")
        .write_stdin("... --- ...   ... --- ...\n")
        .assert()
        .success()
        .stdout("SOS SOS\n");
}

#[test]
fn test_convert_empty_stdin_fails() {
    dotdash()
        .arg("convert")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty input"));
}

#[test]
fn test_convert_files_into_out_dir() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("message.txt");
    fs::write(&input, "hello").unwrap();
    let out_dir = temp.path().join("converted");

    dotdash()
        .arg("convert")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted to:"));

    let outputs: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(outputs.len(), 1);

    let name = outputs[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("-message.txt"), "{name}");
    assert_eq!(
        fs::read_to_string(&outputs[0]).unwrap(),
        ".... . .-.. .-.. ---"
    );
}

#[test]
fn test_convert_same_name_twice_writes_both() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    fs::create_dir_all(&a).unwrap();
    fs::create_dir_all(&b).unwrap();
    fs::write(a.join("msg.txt"), "sos").unwrap();
    fs::write(b.join("msg.txt"), "... --- ...").unwrap();
    let out_dir = temp.path().join("converted");

    dotdash()
        .arg("convert")
        .arg(a.join("msg.txt"))
        .arg(b.join("msg.txt"))
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("-msg.txt"))
        .stdout(predicate::str::contains("-msg-2.txt"));

    let mut outputs: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| fs::read_to_string(e.unwrap().path()).unwrap())
        .collect();
    outputs.sort();
    assert_eq!(outputs, vec!["... --- ...", "SOS"]);
}

#[test]
fn test_convert_missing_file_fails() {
    let temp = tempdir().unwrap();
    dotdash()
        .arg("convert")
        .arg(temp.path().join("nope.txt"))
        .arg("--out-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_classify() {
    dotdash()
        .arg("classify")
        .arg("... --- ...")
        .assert()
        .success()
        .stdout("decode\n");

    dotdash()
        .arg("classify")
        .arg("SOS")
        .assert()
        .success()
        .stdout("encode\n");

    dotdash()
        .arg("classify")
        .arg("  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty input"));
}

#[test]
fn test_on_unknown_modes() {
    dotdash()
        .args(["--on-unknown", "echo", "encode", "a#b"])
        .assert()
        .success()
        .stdout(".- # -...\n");

    dotdash()
        .args(["--on-unknown", "strict", "encode", "a#b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No encoding for"));
}

#[test]
fn test_trailing_separator_flag() {
    dotdash()
        .args(["--trailing-separator", "encode", "A"])
        .assert()
        .success()
        .stdout(".- \n");
}

#[test]
fn test_no_case_fold() {
    dotdash()
        .args(["--no-case-fold", "encode", "SoS"])
        .assert()
        .success()
        .stdout("... ...\n");
}

#[test]
fn test_char_separator_flag() {
    dotdash()
        .args(["--char-separator", "|", "encode", "SOS"])
        .assert()
        .success()
        .stdout("...|---|...\n");
}

#[test]
fn test_russian_table() {
    dotdash()
        .args(["--table", "russian", "decode", "... --- ..."])
        .assert()
        .success()
        .stdout("СОС\n");
}

#[test]
fn test_strict_table_rejects_russian() {
    dotdash()
        .args(["--table", "russian", "--strict-table", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous table"));
}

#[test]
fn test_unknown_table_rejected() {
    dotdash()
        .args(["--table", "klingon", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown symbol table"));
}

#[test]
fn test_table_listing() {
    dotdash()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A\t.-\nB\t-...\n"))
        .stdout(predicate::str::contains("\"\t.-..-.\n"));
}

#[test]
fn test_config_file() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("codec.json");
    fs::write(
        &config,
        r#"{ "symbols": { "A": "x", "B": "y" }, "char_separator": "", "case_fold": true }"#,
    )
    .unwrap();

    dotdash()
        .arg("--config")
        .arg(&config)
        .args(["encode", "abba"])
        .assert()
        .success()
        .stdout("xyyx\n");
}

#[test]
fn test_config_file_derives_word_separator() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("codec.json");
    fs::write(&config, r#"{ "char_separator": "|" }"#).unwrap();

    dotdash()
        .arg("--config")
        .arg(&config)
        .args(["decode", "...|---|...| |.-"])
        .assert()
        .success()
        .stdout("SOS A\n");

    dotdash()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_separator\"").not());
}

#[test]
fn test_config_output() {
    dotdash()
        .args(["--on-unknown", "echo", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"on_unknown\": \"echo\""))
        .stdout(predicate::str::contains("\"table\": \"international\""));
}
