use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info, warn };

use hplrv::{ DashboardClient, DashboardConfig, DashboardState };

mod cli;
use cli::{ Commands, HplrvCli };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = HplrvCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Highlight { property, file, format } => {
            cli::commands::highlight::execute(property.as_deref(), file.as_deref(), format)
        }

        Commands::Connect { host, port, interactive } => {
            let client = DashboardClient::new(&config)?;
            let mut state = DashboardState::new(&config);
            cli::commands::connect::execute(
                &client,
                &mut state,
                host.as_deref(),
                *port,
                *interactive
            ).await?;
            Ok(())
        }

        Commands::Watch { connect, witness, format } => {
            let client = DashboardClient::new(&config)?;
            let mut state = DashboardState::new(&config);
            cli::commands::watch::execute(
                &client,
                &mut state,
                connect.as_deref(),
                *witness,
                format
            ).await
        }
    }
}

fn load_config(cli: &HplrvCli) -> Result<DashboardConfig> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DashboardConfig::from_file(path).with_context(||
                format!("Failed to load configuration from {}", path.display())
            )?
        }
        None => DashboardConfig::default(),
    };

    let mut config = config.with_env_overrides()?;
    if let Some(url) = &cli.url {
        config.dashboard_url = url.clone();
    }
    if !config.dashboard_url.starts_with("http") {
        warn!("Dashboard URL {} does not look like an HTTP URL", config.dashboard_url);
    }
    debug!("Using dashboard server at {}", config.dashboard_url);
    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
