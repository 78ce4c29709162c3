//! External commands run on behalf of a playground.
//!
//! Two collaborators are spawned: the module init command (run inside the new
//! playground) and the editor (run once on the directory, once on the entry
//! file). Both inherit the terminal and run to completion before goplay
//! continues.

use crate::error::{PlayError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run `argv` with `dir` as the working directory and wait for it to finish.
///
/// Returns an error if the program cannot be spawned or exits unsuccessfully.
pub fn run_in(argv: &[String], dir: &Path) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| PlayError::Command("empty command".to_string()))?;

    tracing::debug!(program = %program, ?args, cwd = %dir.display(), "running command");

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| {
            PlayError::Command(format!(
                "failed to run '{}': {}",
                shell_words::join(argv),
                e
            ))
        })?;

    check_status(argv, status)
}

fn check_status(argv: &[String], status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    let code = status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string());
    Err(PlayError::Command(format!(
        "'{}' exited with {}",
        shell_words::join(argv),
        code
    )))
}

/// Open `target` in the editor.
///
/// The path is appended to the configured editor arguments.
pub fn run_editor(editor_argv: &[String], target: &Path, cwd: &Path) -> Result<()> {
    let mut argv = editor_argv.to_vec();
    argv.push(target.to_string_lossy().into_owned());
    run_in(&argv, cwd)
}

/// Run the module init command inside `dir`.
///
/// Failures are logged and swallowed: init commands such as `go mod init`
/// fail when the playground is being reused, and that must not block
/// opening it.
pub fn run_module_init(init_argv: Option<&[String]>, dir: &Path) {
    let Some(argv) = init_argv else {
        tracing::debug!("module init disabled");
        return;
    };

    if let Err(e) = run_in(argv, dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "module init failed, continuing");
    }
}
