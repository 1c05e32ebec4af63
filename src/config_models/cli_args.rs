use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use serde::Deserialize;
use serde::Serialize;

/// How command results are written to stdout.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// one human-readable line per entry
    #[default]
    Text,

    /// a single JSON document
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the display record of every transaction group.
    History,

    /// List the sites connected to an address.
    ConnectedDomains { address: String },

    /// Show, for every address, the sites connected to it.
    AddressDomains,

    /// List the addresses a site can see.
    AccountsForOrigin { origin: String },

    /// Dump shell completions.
    Completions,
}

/// The `wallet-activity` command-line program derives the activity view of a
/// wallet from its persisted state.
#[derive(Parser, Debug, Clone)]
#[clap(name = "wallet-activity", author, version, about)]
pub struct Args {
    /// JSON file holding `snapshot` (the wallet state) and
    /// `transactionGroups`.
    ///
    /// Not needed for `completions`.
    #[clap(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Locale catalog in the `{"key": {"message": "..."}}` format.
    ///
    /// The built-in English catalog is used when omitted.
    #[clap(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Output format, `text` or `json`.
    #[clap(long, default_value = "text")]
    pub output: OutputFormat,

    #[clap(subcommand)]
    pub command: Command,
}
