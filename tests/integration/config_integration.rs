//! Configuration files driving the binary.

use super::test_utils::{stderr_of, EclipseFixture};

#[test]
fn test_local_config_changes_bundle_and_follow_ups() {
    let fixture = EclipseFixture::new();
    std::fs::write(fixture.run_dir.join("custom.prefs"), "k=v\n").unwrap();
    std::fs::write(
        fixture.run_dir.join("prefmerge.toml"),
        "[merge]\nbundled_prefs = \"custom.prefs\"\nfollow_up_files = []\n",
    )
    .unwrap();

    let output = fixture.command().arg(&fixture.workspace).output().unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("To finish"));
    assert_eq!(fixture.read_target().unwrap(), "k=v\n");
}

#[test]
fn test_explicit_config_file_is_required() {
    let fixture = EclipseFixture::new();
    fixture.write_bundle("a=1\n");

    let output = fixture
        .command()
        .arg("--config")
        .arg(fixture.root().join("missing.toml"))
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Configuration error"));
    assert!(fixture.read_target().is_none());
}

#[test]
fn test_environment_overrides_separator() {
    let fixture = EclipseFixture::new();
    fixture.write_bundle("a:1\n");

    let output = fixture
        .command()
        .env("PREFMERGE__MERGE__SEPARATOR", ":")
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(fixture.read_target().unwrap(), "a:1\n");
}

#[test]
fn test_invalid_config_rejected() {
    let fixture = EclipseFixture::new();
    fixture.write_bundle("a=1\n");
    std::fs::write(
        fixture.run_dir.join("prefmerge.toml"),
        "[merge]\nseparator = \"\"\n",
    )
    .unwrap();

    let output = fixture.command().arg(&fixture.workspace).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("separator cannot be empty"));
}
