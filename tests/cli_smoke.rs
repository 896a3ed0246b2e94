use std::path::PathBuf;

use sortviz::Trace;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_sortviz")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "sortviz.exe"
            } else {
                "sortviz"
            });
            p
        })
}

#[test]
fn cli_trace_writes_parseable_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let out_path = dir.join("bubble_trace.json");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(bin_path())
        .args([
            "trace",
            "--algorithm",
            "bubble",
            "--values",
            "5,3,4,1",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());

    let json = std::fs::read_to_string(&out_path).unwrap();
    let trace: Trace = serde_json::from_str(&json).unwrap();
    assert!(trace.len() >= 2);
    assert_eq!(trace.last().unwrap().values(), vec![1, 3, 4, 5]);
}

#[test]
fn cli_frame_prints_a_step() {
    let output = std::process::Command::new(bin_path())
        .args([
            "frame",
            "--algorithm",
            "quick",
            "--values",
            "3,1",
            "--step",
            "0",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Starting Quick Sort"));
}

#[test]
fn cli_rejects_unparseable_values() {
    let status = std::process::Command::new(bin_path())
        .args(["trace", "--algorithm", "merge", "--values", "zzz"])
        .status()
        .unwrap();

    assert!(!status.success());
}
