//! Journal CLI
//!
//! Terminal front-end for on-chain journals:
//! - Create a journal
//! - Show a journal and its entries
//! - Append an entry
//! - Inspect the connected account

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use sui_journal::config::{generate_default_config, Config};
use sui_journal::journal::{JournalCreator, JournalViewer};
use sui_journal::ledger::{ConnectorWallet, LedgerClient, ObjectId, SuiRpcClient, Wallet};
use sui_journal::logging;

#[derive(Parser)]
#[command(name = "journal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Keep a journal on the Sui ledger")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Network to use (overrides config)
    #[arg(short, long, global = true)]
    pub network: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a journal owned by the connected account
    Create {
        /// Journal title
        title: String,
    },

    /// Show a journal and its entries
    Show {
        /// Journal object id
        id: String,
    },

    /// Append an entry to a journal you own
    Append {
        /// Journal object id
        id: String,
        /// Entry text
        text: String,
    },

    /// Show the wallet's connected account
    Account,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(network) = cli.network {
        config.network = network;
    }

    logging::init(&config.logging);

    let client: Arc<dyn LedgerClient> = Arc::new(SuiRpcClient::new(config.rpc_config()?)?);
    let wallet: Arc<dyn Wallet> = Arc::new(ConnectorWallet::new(config.connector_config())?);

    match cli.command {
        Commands::Create { title } => {
            let package = config.package_id()?;
            let mut creator = JournalCreator::new(
                package.clone(),
                Arc::clone(&wallet),
                Arc::clone(&client),
                |id: &ObjectId| println!("Created journal {}", id),
            );
            creator.set_title(title);

            if !creator.can_submit() {
                eprintln!("Title must not be empty");
                std::process::exit(1);
            }

            let id = match creator.submit().await {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Failed to create journal: {}", e);
                    std::process::exit(1);
                }
            };

            let mut viewer = JournalViewer::new(id, Some(package), wallet, client, || {});
            viewer.refresh().await;
            println!();
            print!("{}", viewer.display());
        }

        Commands::Show { id } => {
            // Reading needs no deployed package
            let package = config.package_id().ok();
            let mut viewer =
                JournalViewer::new(ObjectId::parse(&id)?, package, wallet, client, || {});
            viewer.refresh().await;
            println!("{}", viewer.display());
        }

        Commands::Append { id, text } => {
            let package = config.package_id()?;
            let mut viewer =
                JournalViewer::new(ObjectId::parse(&id)?, Some(package), wallet, client, || {});
            viewer.refresh().await;

            if viewer.journal().is_none() {
                eprintln!("{}", viewer.display());
                std::process::exit(1);
            }
            if !viewer.owned_by_me() {
                eprintln!("Only the journal owner can add entries");
                std::process::exit(1);
            }

            viewer.set_entry_text(text);
            if !viewer.can_add_entry() {
                eprintln!("Entry text must not be empty");
                std::process::exit(1);
            }

            match viewer.add_entry().await {
                Ok(Some(digest)) => println!("Entry added ({})\n", digest),
                Ok(None) => {}
                Err(e) => {
                    eprintln!("Failed to add entry: {}", e);
                    std::process::exit(1);
                }
            }
            print!("{}", viewer.display());
        }

        Commands::Account => match wallet.current_account().await? {
            Some(address) => println!("{}", address),
            None => println!("No account connected"),
        },

        // Handled before loading config
        Commands::Config { .. } => {}
    }

    Ok(())
}
