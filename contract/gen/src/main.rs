//! Contract Generator CLI
//!
//! Loads the server-published descriptor maps and writes the typed
//! client contract into the consuming project.

use std::env;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::Level;

use contract_gen::config::ProjectConfig;
use contract_gen::errors::GeneratorError;
use contract_gen::load_contract;
use contract_gen::output::{check_and_format, reset_contract, write_atomic};

/// Contract generator - turns published endpoint descriptors into typed client contracts
#[derive(Parser, Debug)]
#[command(name = "contract-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch descriptors from the server and regenerate the contract
    #[command(alias = "l")]
    Load {
        /// Scope prefix; overrides the configured default
        #[arg(short, long)]
        scope: Option<String>,

        /// Override the configured description API prefix
        #[arg(long)]
        api_prefix: Option<String>,

        /// Override the configured static assets prefix
        #[arg(long)]
        assets_prefix: Option<String>,

        /// Override the configured server base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Parse and pretty-print the artifact before writing
        #[arg(long)]
        check: bool,

        /// Print the generated contract without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Rewrite the contract as the all-permissive baseline
    #[command(alias = "r")]
    Reset {
        /// Parse and pretty-print the artifact before writing
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let cwd = env::current_dir().map_err(|e| GeneratorError::ConfigRead {
        path: ".".to_string(),
        source: e,
    })?;
    let config = ProjectConfig::discover(&cwd)?;

    match cli.command {
        Commands::Load {
            scope,
            api_prefix,
            assets_prefix,
            base_url,
            check,
            dry_run,
        } => {
            let scope = config.resolve_scope(scope)?;
            load(&config, &scope, api_prefix, assets_prefix, base_url, check, dry_run).await;
        }
        Commands::Reset { check } => reset(&config, check),
    }

    // Both subcommands report completion even after a soft failure;
    // only config errors abort before this point.
    println!("Done");
    Ok(())
}

/// Fetches, synthesizes, and writes the contract.
///
/// Any acquisition or synthesis failure abandons the run with a
/// reported message and writes nothing, leaving the previous artifact
/// untouched.
async fn load(
    config: &ProjectConfig,
    scope: &str,
    api_prefix: Option<String>,
    assets_prefix: Option<String>,
    base_url: Option<String>,
    check: bool,
    dry_run: bool,
) {
    let mut api_types = config.api_types.clone();
    if let Some(prefix) = api_prefix {
        api_types.api_prefix = prefix;
    }
    if let Some(prefix) = assets_prefix {
        api_types.assets_prefix = prefix;
    }
    if let Some(url) = base_url {
        api_types.base_url = url;
    }

    let client = reqwest::Client::new();
    let text = match load_contract(&client, config, &api_types, scope, check).await {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return;
        }
    };

    if dry_run {
        println!("{text}");
        return;
    }

    if let Err(err) = write_atomic(&config.client_path(), &text) {
        eprintln!("{}", err.to_string().red());
    }
}

/// Rewrites the contract as the deterministic permissive baseline.
fn reset(config: &ProjectConfig, check: bool) {
    let text = reset_contract();
    let text = if check {
        match check_and_format(&text) {
            Ok(formatted) => formatted,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                return;
            }
        }
    } else {
        text
    };

    if let Err(err) = write_atomic(&config.client_path(), &text) {
        eprintln!("{}", err.to_string().red());
    }
}
