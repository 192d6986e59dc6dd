mod common;

use common::TestEnv;

const RECORDS: &str = r#"[
    {"id": 1, "transcript": "Thank", "timestamp": "2025-12-05T17:58:48Z", "speaker": ""},
    {"id": 2, "transcript": "Good.", "timestamp": "2025-12-05T17:59:46Z", "speaker": ""},
    {"id": 3, "transcript": "Hello.", "timestamp": "2025-12-05T18:00:18Z", "speaker": "Elie Kasongo"},
    {"id": 4, "transcript": "I'm", "timestamp": "2025-12-05T18:00:19Z", "speaker": "Elie Kasongo"},
    {"id": 5, "transcript": "very good, thanks.", "timestamp": "2025-12-05T18:00:20Z", "speaker": "Tammer Kamel"}
]"#;

#[test]
fn format_merges_records_into_dialogue() {
    let env = TestEnv::new();
    let input = env.write_file("records.json", RECORDS);

    let output = env.run(&["format", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "format should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Unknown speaker: Thank Good."));
    assert!(stdout.contains("Elie Kasongo: Hello. I'm"));
    assert!(stdout.contains("Tammer Kamel: very good, thanks."));
}

#[test]
fn format_writes_output_file() {
    let env = TestEnv::new();
    let input = env.write_file("records.json", RECORDS);
    let out_path = env.write_file("dialogue.txt", "");

    let output = env.run(&[
        "format",
        input.to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "format --output should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dialogue = std::fs::read_to_string(&out_path).expect("read formatted transcript");
    assert!(dialogue.starts_with("Unknown speaker: Thank Good."));
}

#[test]
fn format_rejects_malformed_records() {
    let env = TestEnv::new();
    let input = env.write_file("records.json", "[{\"id\": }]");

    let output = env.run(&["format", input.to_str().unwrap()]);
    assert!(
        !output.status.success(),
        "format should fail on malformed records"
    );
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("invalid sentence records"),
        "expected parse error\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn format_reports_missing_input_file() {
    let env = TestEnv::new();

    let output = env.run(&["format", "no-such-file.json"]);
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("no-such-file.json"),
        "expected missing file error\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
