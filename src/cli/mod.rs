//! CLI argument parsing for goplay.
//!
//! Uses clap derive macros for declarative argument definitions. The parsed
//! flags are folded into a single [`Action`]; actual implementations are in
//! the `commands` module.

use clap::{ArgAction, Parser};

/// GoPlay: scaffold throwaway playground projects and clean them up later.
///
/// Playgrounds live under the directory named by GOPLAY_DIR (default
/// ~/.goplay) and are opened with GOPLAY_CODE_CMD (default `code`).
///
/// Usage:
///   goplay            create a playground with a random name
///   goplay NAME       create (or reopen) the playground NAME
///   goplay -d         delete the most recent playground
///   goplay -d NAME    delete the playground NAME
///   goplay -d 2       delete the last 2 playgrounds
///   goplay -D         delete every playground, after confirmation
#[derive(Parser, Debug)]
#[command(name = "goplay")]
#[command(author, version, about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Name of the playground to create. Random when omitted; cannot be an integer.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Delete a playground by NAME, or the last COUNT playgrounds (default 1).
    #[arg(
        short = 'd',
        long = "delete",
        value_name = "NAME|COUNT",
        num_args = 0..=1,
        default_missing_value = "1",
        allow_negative_numbers = true,
        conflicts_with_all = ["name", "delete_all", "list"]
    )]
    pub delete: Option<String>,

    /// Delete every recorded playground.
    #[arg(short = 'D', long = "delete-all", conflicts_with_all = ["name", "list"])]
    pub delete_all: bool,

    /// Skip the confirmation prompt of --delete-all.
    #[arg(short = 'y', long, requires = "delete_all")]
    pub yes: bool,

    /// List recorded playgrounds, oldest first.
    #[arg(short = 'l', long, conflicts_with = "name")]
    pub list: bool,

    /// Print the listing as JSON.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a single goplay invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a playground, or reopen an existing one.
    Create { name: Option<String> },
    /// Delete by name or by count; `target` is the raw `-d` value.
    Delete { target: String },
    /// Delete every playground in the ledger.
    DeleteAll { yes: bool },
    /// Show the ledger.
    List { json: bool },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The action selected by the parsed flags.
    pub fn action(&self) -> Action {
        if let Some(target) = &self.delete {
            Action::Delete {
                target: target.clone(),
            }
        } else if self.delete_all {
            Action::DeleteAll { yes: self.yes }
        } else if self.list {
            Action::List { json: self.json }
        } else {
            Action::Create {
                name: self.name.clone(),
            }
        }
    }
}
