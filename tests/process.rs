use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::test]
async fn closed_stdout_is_fatal_and_logs_stay_on_stderr() {
    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_randoms"))
        .args(["--help", "ignored"])
        .env("RUST_LOG", "info")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let stdout = child.stdout.take().unwrap();
    let mut first = String::new();
    BufReader::new(stdout).read_line(&mut first).await.unwrap();
    // reader dropped here, closing the pipe before the next line

    let output = child.wait_with_output().await.unwrap();
    assert!(!output.status.success());

    let line = first.strip_suffix('\n').unwrap();
    line.parse::<u64>().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("starting emitter"), "stderr: {stderr}");
    assert!(stderr.contains("Failed to emit events"), "stderr: {stderr}");
    assert!(stderr.contains("Broken pipe"), "stderr: {stderr}");
}
