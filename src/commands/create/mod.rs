//! Implementation of `goplay [NAME]`.
//!
//! Creates (or reopens) a playground under the home directory:
//!
//! 1. Resolves the name (random UUID when omitted, integers refused)
//! 2. Creates the directory, or reuses it per `existing_dir`
//! 3. Runs the module init command (failures ignored)
//! 4. Writes the template entry file if it is not there yet
//! 5. Opens the directory, then the entry file, in the editor
//! 6. Stamps the marker and appends the directory to the ledger
//!
//! Step 6 runs even when steps 3-5 fail, as long as the directory exists, so
//! a half-set-up playground can still be deleted with `goplay -d`. The marker
//! is written before the ledger entry: anything reachable from the ledger is
//! always marked.

pub mod naming;
mod scaffolding;


use crate::config::Config;
use crate::context::PlayContext;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::marker;
use crate::process::{run_editor, run_module_init};
use std::path::{Path, PathBuf};

use naming::resolve_name;
use scaffolding::{create_playground_dir, write_template_file};

/// Execute `goplay [NAME]`.
pub fn cmd_create(
    ctx: &PlayContext,
    config: &Config,
    ledger: &mut Ledger,
    name: Option<&str>,
) -> Result<()> {
    let dir = create_playground(ctx, config, ledger, name)?;
    println!("Playground: {}", dir.display());
    Ok(())
}

/// Create the playground and record it. Returns its path.
pub fn create_playground(
    ctx: &PlayContext,
    config: &Config,
    ledger: &mut Ledger,
    name: Option<&str>,
) -> Result<PathBuf> {
    let name = resolve_name(name)?;
    let dir = ctx.playground_path(&name);
    let editor_argv = config.editor_argv()?;
    let init_argv = config.init_argv()?;

    let created = create_playground_dir(&dir, config.existing_dir)?;
    tracing::info!(dir = %dir.display(), created, "playground directory ready");

    let setup = set_up(&dir, config, &editor_argv, init_argv.as_deref());
    let registered = register(ledger, &dir);

    match (setup, registered) {
        (Ok(()), registered) => registered.map(|()| dir),
        (Err(setup_err), Ok(())) => Err(setup_err),
        (Err(setup_err), Err(register_err)) => {
            eprintln!("Warning: {}", register_err);
            Err(setup_err)
        }
    }
}

/// Run the init command, write the entry file, and open both in the editor.
fn set_up(
    dir: &Path,
    config: &Config,
    editor_argv: &[String],
    init_argv: Option<&[String]>,
) -> Result<()> {
    run_module_init(init_argv, dir);
    let entry = write_template_file(dir, config)?;
    run_editor(editor_argv, dir, dir)?;
    run_editor(editor_argv, &entry, dir)?;
    Ok(())
}

/// Mark the directory as ours, then record it in the ledger.
///
/// The ledger append is best-effort: failing to record a playground must not
/// fail its creation.
fn register(ledger: &mut Ledger, dir: &Path) -> Result<()> {
    marker::stamp(dir)?;

    if let Err(e) = ledger.append(dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "playground not recorded in ledger");
        eprintln!("Warning: {}", e);
    }

    Ok(())
}
