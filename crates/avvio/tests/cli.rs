use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_avvio"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute avvio");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("startup entries"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("remove"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_avvio"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute avvio");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("avvio"));
}

#[test]
fn add_without_arguments_is_a_usage_error() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_avvio"));
    cmd.arg("add");

    // Act
    let output = cmd.output().expect("failed to execute avvio");

    // Assert: clap reports missing required arguments.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required"));
}

#[test]
fn unknown_subcommand_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_avvio"));
    cmd.arg("frobnicate");

    // Act
    let output = cmd.output().expect("failed to execute avvio");

    // Assert
    assert!(!output.status.success());
}
