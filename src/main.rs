use clap::Parser;
use daily_cash::cli::{self, Cli, Commands};
use daily_cash::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::example()?
        }
    };

    // Initialize telemetry
    let _telemetry = daily_cash::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Estimate(args) => {
            args.execute(&config.network.currency)?;
        }
        Commands::Connect => {
            cli::run_connect(&config).await?;
        }
        Commands::Bonus => {
            cli::run_bonus(&config).await?;
        }
        Commands::Invest(args) => {
            args.execute(&config).await?;
        }
        Commands::Withdraw => {
            cli::run_withdraw(&config).await?;
        }
        Commands::Session(args) => {
            tracing::info!("Starting interactive session");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Network: {:?} {}", config.network.mode, config.network.rpc_url);
            match config.network.contract_address {
                Some(address) => println!("  Contract: {address}"),
                None => println!("  Contract: not deployed"),
            }
            println!("  Default referrer: {}", config.network.default_referrer);
            if let Some(account) = config.wallet.paper_account {
                println!("  Paper account: {account}");
            }
            println!(
                "  Telemetry: level={} format={:?} metrics_port={:?}",
                config.telemetry.log_level, config.telemetry.log_format, config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
