use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pairsentry::config::BotConfig;
use pairsentry::exchange::StaticMarketData;
use pairsentry::pairlist::PairlistManager;

// --- CLI Argument Parsing ---
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set the verbosity level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    verbose: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the filter pipeline once over the configured pair whitelist
    Filter {
        /// Bot configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,
        /// Market catalog snapshot file (JSON)
        #[arg(short, long)]
        markets: PathBuf,
    },
    /// Print each configured pipeline stage's description
    Describe {
        /// Bot configuration file (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.verbose)),
        )
        .init();

    match &cli.command {
        Commands::Filter { config, markets } => {
            let config = BotConfig::from_json_file(config)?;
            let exchange = Arc::new(StaticMarketData::from_json_file(markets)?);

            let mut manager = PairlistManager::from_config(exchange, &config)?;
            manager.log_startup_messages();

            let whitelist = manager.refresh_pairlist(&config.pair_whitelist)?;
            for pair in &whitelist {
                println!("{pair}");
            }
        }
        Commands::Describe { config } => {
            let config = BotConfig::from_json_file(config)?;
            // Descriptions are pure configuration; an empty catalog is fine here.
            let exchange = Arc::new(StaticMarketData::default());
            let manager = PairlistManager::from_config(exchange, &config)?;
            for desc in manager.short_descs() {
                println!("{desc}");
            }
        }
    }

    Ok(())
}
