//! End-to-end runs of the prefmerge binary.

use super::test_utils::{run_with_input, stderr_of, stdout_of, EclipseFixture};

#[test]
fn test_missing_argument_prints_usage_and_exits_1() {
    let fixture = EclipseFixture::new();
    let output = fixture.command().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Usage"));
}

#[test]
fn test_help_exits_0() {
    let fixture = EclipseFixture::new();
    let output = fixture.command().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_non_workspace_directory_exits_1() {
    let fixture = EclipseFixture::new();
    fixture.write_bundle("a=1\n");
    let output = fixture.command().arg(fixture.root()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Not an Eclipse workspace directory."));
}

#[test]
fn test_fresh_workspace_gets_bundle() {
    let fixture = EclipseFixture::new();
    fixture.write_bundle("#bundled\nRUN_IN_BACKGROUND=true\n");

    let output = fixture.command().arg(&fixture.workspace).output().unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Found workspace: "));
    assert!(stdout.contains("The new preferences have been saved."));
    assert!(stdout.contains("thepeoplescoder.epf"));
    assert_eq!(
        fixture.read_target().unwrap(),
        "#bundled\nRUN_IN_BACKGROUND=true\n"
    );
}

#[test]
fn test_conflict_declined_on_empty_input() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\nb=2\n");
    fixture.write_bundle("a=1\nb=3\nc=4\n");

    let output = run_with_input(
        {
            let mut cmd = fixture.command();
            cmd.arg(&fixture.workspace);
            cmd
        },
        "\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Key \"b\" will be modified."));
    assert!(!stdout.contains("Key \"a\""));
    assert!(stdout.contains("Number of conflicts found: 1"));
    assert!(stdout.contains("Operation aborted."));
    assert_eq!(fixture.read_target().unwrap(), "a=1\nb=2\n");
}

#[test]
fn test_conflict_accepted_with_y() {
    let fixture = EclipseFixture::new();
    fixture.write_target("# existing\na=1\nb=2\n");
    fixture.write_bundle("b=3\nc=4\n");

    let output = run_with_input(
        {
            let mut cmd = fixture.command();
            cmd.arg(&fixture.workspace);
            cmd
        },
        "Y\n",
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert!(stdout_of(&output).contains("The new preferences have been saved."));
    assert_eq!(fixture.read_target().unwrap(), "# existing\na=1\nb=3\nc=4\n");
}

#[test]
fn test_force_skips_prompt() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\n");
    fixture.write_bundle("a=2\n");

    let output = fixture
        .command()
        .arg("--force")
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(fixture.read_target().unwrap(), "a=2\n");
}

#[test]
fn test_dry_run_leaves_target_untouched() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\n");
    fixture.write_bundle("a=2\nz=9\n");

    let output = fixture
        .command()
        .arg("--dry-run")
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Nothing was written."));
    assert_eq!(fixture.read_target().unwrap(), "a=1\n");
}

#[test]
fn test_missing_bundle_exits_1() {
    let fixture = EclipseFixture::new();
    let output = fixture.command().arg(&fixture.workspace).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Bundled preferences not found"));
    assert!(fixture.read_target().is_none());
}

#[test]
fn test_bundle_flag_overrides_default_location() {
    let fixture = EclipseFixture::new();
    let bundle = fixture.root().join("elsewhere.prefs");
    std::fs::write(&bundle, "x=1\n").unwrap();

    let output = fixture
        .command()
        .arg("--bundle")
        .arg(&bundle)
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert_eq!(fixture.read_target().unwrap(), "x=1\n");
}

#[test]
fn test_json_summary() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\n");
    fixture.write_bundle("a=1\nb=2\n");

    let output = fixture
        .command()
        .args(["--format", "json"])
        .arg(&fixture.workspace)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["status"], "saved");
    assert_eq!(value["summary"]["added"][0], "b");
    assert_eq!(value["summary"]["unchanged"][0], "a");
}

#[test]
fn test_json_report_with_conflict_on_piped_input() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\n");
    fixture.write_bundle("a=2\n");

    let output = run_with_input(
        {
            let mut cmd = fixture.command();
            cmd.args(["--format", "json"]).arg(&fixture.workspace);
            cmd
        },
        "y\n",
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let value: serde_json::Value = serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout));
    assert_eq!(value["status"], "saved");
    assert_eq!(value["conflicts"][0]["key"], "a");
    assert!(stderr_of(&output).contains("Do you want to continue (y/N)?"));
    assert_eq!(fixture.read_target().unwrap(), "a=2\n");
}

#[test]
fn test_piped_prompt_goes_to_stderr() {
    let fixture = EclipseFixture::new();
    fixture.write_target("a=1\n");
    fixture.write_bundle("a=2\n");

    let output = run_with_input(
        {
            let mut cmd = fixture.command();
            cmd.arg(&fixture.workspace);
            cmd
        },
        "n\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout_of(&output).contains("only warning"));
    assert!(stderr_of(&output).contains("This is your only warning.  Do you want to continue (y/N)? "));
    assert!(stdout_of(&output).contains("Operation aborted."));
}
