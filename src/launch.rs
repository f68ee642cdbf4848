use std::path::Path;
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot start {command_line}")]
    LaunchFailed {
        command_line: String,
        #[source]
        source: std::io::Error,
    },
}

/// Spawn the target process and return without waiting for it.
///
/// Fire-and-forget: only the synchronous creation result is observed, and the
/// child handle is dropped immediately so the wrapper can exit while the
/// target keeps running.
///
/// Unix hands the pass-through arguments to the child structurally;
/// `command_line` is the flat rendering used in diagnostics.
#[cfg(unix)]
pub fn relaunch(target: &Path, args: &[String], command_line: &str) -> Result<(), LaunchError> {
    let mut cmd = Command::new(target);
    if !args.is_empty() {
        cmd.arg("--").args(args);
    }
    cmd.spawn().map_err(|source| LaunchError::LaunchFailed {
        command_line: command_line.to_owned(),
        source,
    })?;
    Ok(())
}

/// Windows hands the target the exact re-quoted tokens: `raw_arg` bypasses
/// the standard library's own quoting, and the tokens were already
/// length-checked when `command_line` was built. The default creation flags
/// leave the child's window visible.
#[cfg(windows)]
pub fn relaunch(target: &Path, args: &[String], command_line: &str) -> Result<(), LaunchError> {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new(target);
    if !args.is_empty() {
        cmd.raw_arg("--");
        for arg in args {
            cmd.raw_arg(crate::cmdline::quote_token(arg));
        }
    }
    cmd.spawn().map_err(|source| LaunchError::LaunchFailed {
        command_line: command_line.to_owned(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaunch_nonexistent_target_fails() {
        let target = Path::new("/nonexistent/binary/does-not-exist");
        let err = relaunch(target, &[], "/nonexistent/binary/does-not-exist").unwrap_err();
        match err {
            LaunchError::LaunchFailed { command_line, .. } => {
                assert_eq!(command_line, "/nonexistent/binary/does-not-exist");
            }
        }
    }

    #[cfg(unix)]
    fn write_script(path: &Path, contents: &str) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::write(path, contents).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Poll for the file the child writes; the wrapper never waits on the
    /// child, so the test has to.
    #[cfg(unix)]
    fn wait_for_contents(path: &Path, expected: &str) -> String {
        let mut recorded = String::new();
        for _ in 0..50 {
            if let Ok(contents) = std::fs::read_to_string(path) {
                recorded = contents;
                if recorded == expected {
                    break;
                }
            }
            std::thread::sleep(std::time::Duration::from_millis(100));
        }
        recorded
    }

    #[cfg(unix)]
    #[test]
    fn relaunch_forwards_args_after_the_separator() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("argv.txt");
        let script = dir.path().join("record-argv");
        write_script(
            &script,
            &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n", out.display()),
        );

        let args = vec!["--flag".to_string(), "path with space".to_string()];
        relaunch(&script, &args, "unused in this test").unwrap();

        let expected = "--\n--flag\npath with space\n";
        assert_eq!(wait_for_contents(&out, expected), expected);
    }

    #[cfg(unix)]
    #[test]
    fn relaunch_without_args_adds_no_separator() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("argc.txt");
        let script = dir.path().join("record-argc");
        write_script(
            &script,
            &format!("#!/bin/sh\nprintf '%s' \"$#\" > \"{}\"\n", out.display()),
        );

        relaunch(&script, &[], "unused in this test").unwrap();

        assert_eq!(wait_for_contents(&out, "0"), "0");
    }
}
