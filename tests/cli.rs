//! End-to-end tests for the promptgen binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const REFERENCE_TIME: &str = "2024-06-01T12:00:00Z";

fn promptgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_promptgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("PROMPTGEN_SEED")
        .env_remove("PROMPTGEN_ROWS")
        .env_remove("PROMPTGEN_OUTPUT_DIR")
        .env_remove("PROMPTGEN_VOCABULARY")
        .output()
        .expect("run promptgen")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "promptgen exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_generate_writes_every_format() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().to_str().unwrap();

    let output = promptgen(&[
        "generate",
        "--prompt",
        "eventos json, 25 filas",
        "--format",
        "csv",
        "--format",
        "jsonl",
        "--format",
        "txt",
        "--output-dir",
        out,
        "--reference-time",
        REFERENCE_TIME,
    ]);
    assert_success(&output);

    let jsonl = fs::read_to_string(temp_dir.path().join("dataset_semi.jsonl")).unwrap();
    assert_eq!(jsonl.lines().count(), 25);
    for line in jsonl.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("ts").is_some());
    }

    let csv = fs::read_to_string(temp_dir.path().join("dataset_semi.csv")).unwrap();
    assert!(csv.starts_with("ts,user,ip,event,result"));

    let txt = fs::read_to_string(temp_dir.path().join("dataset_semi.txt")).unwrap();
    assert_eq!(txt, jsonl);
}

#[test]
fn test_generate_is_reproducible() {
    let args = [
        "generate",
        "--prompt",
        "logs del carrito",
        "--rows",
        "10",
        "--seed",
        "9",
        "--format",
        "txt",
        "--reference-time",
        REFERENCE_TIME,
    ];

    let first = promptgen(&args);
    let second = promptgen(&args);
    assert_success(&first);
    assert_success(&second);

    assert_eq!(first.stdout, second.stdout);
    let text = String::from_utf8(first.stdout).unwrap();
    assert_eq!(text.lines().count(), 10);
    assert!(text.lines().all(|line| line.starts_with("2024-")));
}

#[test]
fn test_kind_flag_overrides_prompt() {
    let output = promptgen(&[
        "generate",
        "--prompt",
        "logs, 3 rows",
        "--kind",
        "structured",
        "--format",
        "csv",
    ]);
    assert_success(&output);

    let csv = String::from_utf8(output.stdout).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,partner,amount"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn test_unknown_kind_or_format_is_rejected() {
    let output = promptgen(&["generate", "--kind", "tabular"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown dataset kind 'tabular'"), "{stderr}");

    let output = promptgen(&["generate", "--format", "xlsx"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown export format 'xlsx'"), "{stderr}");
}

#[test]
fn test_jsonl_keeps_column_order() {
    let output = promptgen(&[
        "generate",
        "--prompt",
        "columnas: z:int, a:string, m:float",
        "--rows",
        "2",
        "--seed",
        "42",
        "--format",
        "jsonl",
    ]);
    assert_success(&output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some(r#"{"z":26,"a":"delta","m":11.1}"#));
}

#[test]
fn test_seed_42_scenario() {
    let output = promptgen(&[
        "generate",
        "--prompt",
        "columnas: date:date, amount:float",
        "--rows",
        "3",
        "--seed",
        "42",
        "--kind",
        "structured",
    ]);
    assert_success(&output);

    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "date,amount\n\"2024-01-01\",0.26\n\"2024-01-02\",66.03\n\"2024-01-03\",11.1\n"
    );
}

#[test]
fn test_zero_rows() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().to_str().unwrap();

    for kind in ["structured", "semi", "unstructured"] {
        let output = promptgen(&[
            "generate", "--rows", "0", "--prompt", "", "--kind", kind, "--format", "csv",
            "--format", "jsonl", "--format", "txt", "--output-dir", out,
        ]);
        assert_success(&output);
        for ext in ["csv", "jsonl", "txt"] {
            let path = temp_dir.path().join(format!("dataset_{kind}.{ext}"));
            assert_eq!(fs::read_to_string(&path).unwrap(), "", "{path:?}");
        }
    }
}

#[test]
fn test_preview_limits_rows() {
    let output = promptgen(&[
        "preview",
        "--prompt",
        "100 rows",
        "--max-rows",
        "5",
    ]);
    assert_success(&output);

    let text = String::from_utf8(output.stdout).unwrap();
    // Header plus five rows.
    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().next(), Some("date\tpartner\tamount"));
}

#[test]
fn test_plan_prints_json() {
    let output = promptgen(&["plan", "--prompt", "columns: id:int, name\nseed=5, 12 rows"]);
    assert_success(&output);

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["kind"], "structured");
    assert_eq!(plan["row_count"], 12);
    assert_eq!(plan["seed"], 5);
    assert_eq!(plan["columns"][0]["name"], "id");
    assert_eq!(plan["columns"][1]["type"], "string");
}

#[test]
fn test_custom_vocabulary() {
    let temp_dir = TempDir::new().unwrap();
    let vocabulary = temp_dir.path().join("vocabulary.yaml");
    fs::write(&vocabulary, "semi_kind: 'eventos?'\nrow_count: '(\\d+)\\s*registros'\n").unwrap();

    let output = promptgen(&[
        "plan",
        "--prompt",
        "8 registros de eventos",
        "--vocabulary",
        vocabulary.to_str().unwrap(),
    ]);
    assert_success(&output);

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["kind"], "semi");
    assert_eq!(plan["row_count"], 8);
}

#[test]
fn test_invalid_vocabulary_fails() {
    let temp_dir = TempDir::new().unwrap();
    let vocabulary = temp_dir.path().join("vocabulary.yaml");
    fs::write(&vocabulary, "seed: 'seed=(\\d+'\n").unwrap();

    let output = promptgen(&["plan", "--vocabulary", vocabulary.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("seed"), "{stderr}");
}
