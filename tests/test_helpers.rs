use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `moodlog` binary with a clean environment and
/// the entry store pointed at `store_path`.
pub fn base_moodlog_command(store_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").expect("moodlog binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("MOODLOG_FILE", store_path);
    cmd
}

/// Parses stdout of a successful `--json` invocation.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("failed to run moodlog");
    assert!(
        output.status.success(),
        "moodlog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout was not JSON")
}
