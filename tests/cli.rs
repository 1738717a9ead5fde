use assert_cmd::Command;
use predicates::prelude::*;

fn parabola() -> Command {
    let mut cmd = Command::cargo_bin("parabola").unwrap();
    cmd.arg("--headless");
    cmd
}

#[test]
fn test_default_curve() {
    parabola()
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parabol Çizici Programı"))
        .stdout(predicate::str::contains("Parabol: y = 1x² + 0x + 0"))
        .stdout(predicate::str::contains("Tepe Noktası (0.00, 0.00)"));
}

#[test]
fn test_demo_curve() {
    parabola()
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parabol: y = 2x² + -4x + 1"))
        .stdout(predicate::str::contains("Tepe Noktası (1.00, -1.00)"));
}

#[test]
fn test_multi_curve() {
    parabola()
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Farklı Parabol Örnekleri"))
        .stdout(predicate::str::contains("y = 2x² - 4x + 2"));
}

#[test]
fn test_invalid_choice_falls_back_to_default() {
    parabola()
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Geçersiz seçim! Basit parabol çiziliyor..."))
        .stdout(predicate::str::contains("Parabol: y = 1x² + 0x + 0"));
}

#[test]
fn test_interactive_mode() {
    parabola()
        .write_stdin("4\n0\n3\n2\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parabol: y = 0x² + 3x + 2"))
        .stdout(predicate::str::contains("Tepe Noktası").not());
}

#[test]
fn test_interactive_invalid_input() {
    parabola()
        .write_stdin("4\nabc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hata: Lütfen geçerli sayılar girin!"))
        .stdout(predicate::str::contains("Parabol:").not());
}

#[test]
fn test_invalid_utf8_choice_falls_back_to_default() {
    parabola()
        .write_stdin(vec![0xff, 0xfe, b'\n'])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geçersiz seçim! Basit parabol çiziliyor..."))
        .stdout(predicate::str::contains("Parabol: y = 1x² + 0x + 0"));
}

#[test]
fn test_interactive_invalid_utf8_coefficient() {
    parabola()
        .write_stdin(vec![b'4', b'\n', 0xff, b'\n'])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hata: Lütfen geçerli sayılar girin!"))
        .stdout(predicate::str::contains("Parabol:").not());
}

#[test]
fn test_interactive_whitespace_bound_is_invalid() {
    parabola()
        .write_stdin("4\n1\n0\n0\n  \n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hata: Lütfen geçerli sayılar girin!"))
        .stdout(predicate::str::contains("Parabol:").not());
}

#[test]
fn test_end_of_input_closes_gracefully() {
    parabola()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Program sonlandırıldı!"));
}

#[test]
fn test_samples_must_be_at_least_two() {
    parabola()
        .args(["--samples", "1"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sample count"));
}

#[test]
fn test_log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("parabola.log");

    parabola()
        .arg("--log")
        .arg(&log)
        .write_stdin("9\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting parabola"));
    assert!(contents.contains("invalid menu selection"));
}
