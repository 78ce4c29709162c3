//! Implementation of `goplay -d` and `goplay -D`.
//!
//! Deletes playgrounds by name, the most recent N by count, or all of them.
//!
//! # Safety
//!
//! - A directory is only removed when it carries the goplay marker file
//! - `-D` asks for confirmation unless `--yes` is given
//!
//! # Ledger
//!
//! The ledger is read once before the batch. After every candidate has been
//! attempted, it is rewritten without the entries that were actually
//! removed. Entries whose deletion failed stay in place, in order.

mod display;
mod execution;
mod selection;
mod types;


use crate::context::PlayContext;
use crate::error::Result;
use crate::ledger::Ledger;
use std::io;

use display::{confirm_delete_all, print_report};
use execution::{delete_candidates, reconcile_ledger};
use selection::select_candidates;
use types::{DeletionReport, SelectionRequest};

/// Execute `goplay -d [NAME|COUNT]`.
///
/// Individual failures are reported but do not make the command fail.
pub fn cmd_delete(ctx: &PlayContext, ledger: &mut Ledger, target: &str) -> Result<()> {
    let request = SelectionRequest::parse(target);
    let report = delete_playgrounds(ctx, ledger, &request)?;
    finish(&report, ctx);
    Ok(())
}

/// Execute `goplay -D`.
pub fn cmd_delete_all(ctx: &PlayContext, ledger: &mut Ledger, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = confirm_delete_all(&mut io::stdin().lock(), &mut io::stdout())?;
        if !confirmed {
            println!("Aborting deletion.");
            return Ok(());
        }
    }

    let report = delete_playgrounds(ctx, ledger, &SelectionRequest::All)?;
    finish(&report, ctx);
    Ok(())
}

/// Select, delete, and reconcile the ledger.
///
/// Returns an error only when the request is invalid or the ledger cannot be
/// read or rewritten.
pub fn delete_playgrounds(
    ctx: &PlayContext,
    ledger: &mut Ledger,
    request: &SelectionRequest,
) -> Result<DeletionReport> {
    let entries = ledger.read_all()?;
    let candidates = select_candidates(ctx, request, &entries)?;
    tracing::debug!(?request, candidates = candidates.len(), "selected deletion candidates");

    if candidates.is_empty() {
        return Ok(DeletionReport::default());
    }

    let report = delete_candidates(&candidates);
    reconcile_ledger(ledger, &entries, &report.removed)?;

    Ok(report)
}

fn finish(report: &DeletionReport, ctx: &PlayContext) {
    if report.is_empty() {
        println!("No playgrounds to delete.");
        return;
    }
    print_report(report, &ctx.home_dir);
}
