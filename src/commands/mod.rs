//! Command implementations for goplay.
//!
//! This module provides the dispatcher that sets up the home directory,
//! opens the ledger once for the whole run, and routes the parsed action to
//! its implementation.

mod create;
mod delete;
mod list;

use crate::cli::Action;
use crate::config::Config;
use crate::context::PlayContext;
use crate::error::Result;
use crate::ledger::Ledger;

/// Dispatch an action to its implementation.
///
/// The ledger handle lives for the duration of this call and is closed when
/// it returns.
pub fn dispatch(action: Action) -> Result<()> {
    let ctx = PlayContext::resolve()?;
    ctx.ensure_home()?;
    let mut ledger = Ledger::open(ctx.ledger_path())?;
    tracing::debug!(
        home = %ctx.home_dir.display(),
        ledger = %ledger.path().display(),
        ?action,
        "dispatching"
    );

    match action {
        Action::Create { name } => {
            let config = Config::load_for_run(ctx.config_path())?;
            create::cmd_create(&ctx, &config, &mut ledger, name.as_deref())
        }
        Action::Delete { target } => delete::cmd_delete(&ctx, &mut ledger, &target),
        Action::DeleteAll { yes } => delete::cmd_delete_all(&ctx, &mut ledger, yes),
        Action::List { json } => list::cmd_list(&mut ledger, json),
    }
}
