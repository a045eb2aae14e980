use account_service::{AccountService, AccountServiceConfig, Operation};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Account Service CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an account and apply operations to it
    Run {
        /// Customer name (defaults to ACCOUNT_CUSTOMER_NAME)
        #[arg(short, long)]
        name: Option<String>,

        /// Opening balance (defaults to ACCOUNT_OPENING_BALANCE)
        #[arg(short, long, allow_negative_numbers = true)]
        balance: Option<f64>,

        /// Print the resulting account as JSON
        #[arg(long)]
        json: bool,

        /// Operations such as `credit:50` or `debit:4.55`, applied in order
        operations: Vec<Operation>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "account_service={level},common={level}",
            level = cli.log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run { name, balance, json, operations } => {
            let mut config = AccountServiceConfig::try_from_env()?;
            if let Some(name) = name {
                config.customer_name = name;
            }
            if let Some(balance) = balance {
                config.opening_balance = balance;
            }

            let mut service = AccountService::with_config(&config);

            if let Err(e) = service.apply_all(&operations) {
                error!("Stopped after a rejected operation: {}", e);
                return Err(e.into());
            }

            info!("Applied {} operations", operations.len());

            if json {
                println!("{}", service.snapshot_json()?);
            } else {
                println!("{}", service.account());
            }
        }
    }

    Ok(())
}
