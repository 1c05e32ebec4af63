use std::fs;
use std::io::stdout;
use std::path::Path;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::Shell;
use itertools::Itertools;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;
use wallet_activity::api::activity::derive_display_records;
use wallet_activity::api::activity::ActivityContext;
use wallet_activity::api::permissions;
use wallet_activity::config_models::cli_args::Args;
use wallet_activity::config_models::cli_args::Command;
use wallet_activity::config_models::cli_args::OutputFormat;
use wallet_activity::i18n::LocaleMessages;
use wallet_activity::models::state::WalletSnapshot;
use wallet_activity::models::transaction::TransactionGroup;

/// Contents of the `--state` file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateFile {
    snapshot: WalletSnapshot,
    #[serde(default)]
    transaction_groups: Vec<TransactionGroup>,
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    // Check for completions command before reading any state.
    if let Command::Completions = args.command {
        let Some(shell) = Shell::from_env() else {
            bail!("Unknown shell.  Shell completions not available.")
        };
        generate(shell, &mut Args::command(), "wallet-activity", &mut stdout());
        return Ok(());
    }

    set_up_logger();

    let Some(state_path) = args.state.as_deref() else {
        bail!("--state is required for this command");
    };
    let state = read_state(state_path)?;
    let messages = match args.messages.as_deref() {
        Some(path) => LocaleMessages::from_json(&read(path)?)?,
        None => LocaleMessages::english(),
    };
    let snapshot = &state.snapshot;

    match args.command {
        Command::History => {
            let context = ActivityContext::new(snapshot, &messages);
            let records = derive_display_records(&state.transaction_groups, &context);
            info!(
                "derived {} of {} transaction groups",
                records.iter().filter(|record| record.is_ok()).count(),
                records.len()
            );

            match args.output {
                OutputFormat::Json => {
                    let entries = state
                        .transaction_groups
                        .iter()
                        .zip(&records)
                        .map(|(group, record)| match record {
                            Ok(record) => json!(record),
                            Err(error) => json!({ "id": group.id(), "error": error.to_string() }),
                        })
                        .collect_vec();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for (group, record) in state.transaction_groups.iter().zip(records) {
                        match record {
                            Ok(record) => {
                                let secondary = record
                                    .secondary_currency
                                    .map(|amount| format!(" ({amount})"))
                                    .unwrap_or_default();
                                println!(
                                    "{}  {}{}  [{}]",
                                    record.title, record.primary_currency, secondary, record.status
                                );
                                println!("    {}", record.subtitle);
                            }
                            Err(error) => {
                                println!("transaction group {} cannot be displayed: {error}", group.id());
                            }
                        }
                    }
                }
            }
        }
        Command::ConnectedDomains { address } => {
            let connected = permissions::connected_domains_for_address(
                &snapshot.domains,
                &snapshot.domain_metadata,
                &address,
            );
            match args.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&connected)?),
                OutputFormat::Text => {
                    for domain in connected.iter().sorted_by(|a, b| a.key.cmp(&b.key)) {
                        println!("{}  {}", domain.key, domain.name.as_deref().unwrap_or_default());
                    }
                }
            }
        }
        Command::AddressDomains => {
            let map = permissions::address_to_domain_map(&snapshot.domains, &snapshot.domain_metadata);
            match args.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&map)?),
                OutputFormat::Text => {
                    for (address, domains) in map.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                        println!("{address}");
                        for (origin, info) in domains.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                            println!("    {origin}  {}", info.name);
                        }
                    }
                }
            }
        }
        Command::AccountsForOrigin { origin } => {
            let accounts = permissions::accounts_for_origin(&snapshot.domains, &origin);
            match args.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&accounts)?),
                OutputFormat::Text => {
                    for account in accounts {
                        println!("{account}");
                    }
                }
            }
        }
        Command::Completions => unreachable!("handled before reading state"),
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}

fn read_state(path: &Path) -> Result<StateFile> {
    serde_json::from_str(&read(path)?)
        .with_context(|| format!("{} is not a valid state file", path.display()))
}

/// Configure logger to use ISO-8601, of which rfc3339 is a subset. Install
/// global collector configured based on RUST_LOG env var. Accepted `RUST_LOG`
/// values are `trace`, `debug`, `info`, `warn`, and `error`. Logs go to
/// stderr; stdout carries only command output.
fn set_up_logger() {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .finish(),
    )
    .map_err(|_err| eprintln!("Unable to set global default subscriber"))
    .expect("Failed to set trace subscriber");
}
