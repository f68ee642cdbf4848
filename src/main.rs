// main.rs — orchestration only.
// The whole program is a straight line: locate the target, rebuild the
// command line, launch, exit. All OS interaction lives in the modules below.
mod cmdline;
mod launch;
mod locate;

use cmdline::build_command_line;
use launch::relaunch;
use locate::locate;

/// Base name of the executable this wrapper relaunches. Resolved against the
/// search path on every run; never cached, not configurable.
const TARGET_NAME: &str = "nvim-qt";

/// Name printed in front of error diagnostics.
const WRAPPER_NAME: &str = "nvim-qt-wrapper";

fn main() {
    if let Err(err) = run() {
        eprintln!("{WRAPPER_NAME} error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let target = locate(TARGET_NAME)?;

    // argv[0] is the wrapper's own path; everything after it is opaque
    // pass-through for the target.
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command_line = build_command_line(&target.to_string_lossy(), &args)?;
    relaunch(&target, &args, &command_line)?;
    Ok(())
}
