mod common;

use common::{run_debrief, TestEnv};

#[test]
fn doctor_subcommand_is_available() {
    let output = run_debrief(&["doctor", "--help"]);

    assert!(
        output.status.success(),
        "doctor --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn doctor_command_runs() {
    let output = run_debrief(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "doctor should run successfully\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("debrief doctor"));
    assert!(stdout.contains("model"));
}

#[test]
fn doctor_flags_missing_model_in_fresh_environment() {
    let env = TestEnv::new();
    let output = env.run(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("debrief model download"),
        "expected a download hint when the model is missing\nstdout:\n{}",
        stdout
    );
}

#[test]
fn doctor_json_emits_valid_json() {
    let env = TestEnv::new();
    let output = env.run(&["doctor", "--json"]);

    assert!(
        output.status.success(),
        "doctor --json should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("doctor --json should emit valid JSON");
    assert!(report["checks"].is_array());
    assert_eq!(report["checks"][0]["name"], "model");
    assert_eq!(report["checks"][0]["status"], "missing");
}
