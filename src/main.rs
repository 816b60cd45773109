use anyhow::{ anyhow, Result };
use clap::Parser;
use log::{ debug, info };

use property_registry::{ PropertyStatus, RegistryConfig, SearchCriteria };

mod cli;
use cli::{ commands, ui, Commands, RegistryCli };

fn main() {
    if let Err(e) = run() {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse the command line arguments
    let cli = RegistryCli::parse();

    // Pick up REGISTRY_* overrides from a .env file if one is present
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = RegistryConfig::load(cli.config.as_deref())?;

    // Command line wins over environment and config file
    let log_level = cli.log_level
        .clone()
        .or_else(|| config.effective_log_level())
        .unwrap_or_else(|| "info".to_string());
    setup_logging(&log_level);
    if dotenv_loaded {
        debug!("Loaded environment variables from .env file");
    }

    let format = cli.output_format;

    match cli.command {
        Commands::Run { script, state, save } => {
            commands::run::execute(config, &script, state.as_deref(), save, format)?;
        }

        Commands::Search {
            state,
            property_type,
            location,
            bedrooms,
            min_bedrooms,
            max_bedrooms,
            min_bathrooms,
            max_bathrooms,
            min_rent,
            max_rent,
            income_restricted,
            accessibility_features,
            status,
            owner,
        } => {
            let criteria = SearchCriteria {
                property_type_id: property_type,
                location_id: location,
                min_bedrooms: bedrooms.or(min_bedrooms),
                max_bedrooms: bedrooms.or(max_bedrooms),
                min_bathrooms,
                max_bathrooms,
                min_rent,
                max_rent,
                income_restricted,
                accessibility_features,
                status: status
                    .map(|s| s.parse::<PropertyStatus>())
                    .transpose()
                    .map_err(|e| anyhow!("{}", e))?,
                owner: owner.map(Into::into),
            };
            let registry = commands::search::open_state(&state, config)?;
            commands::search::execute(&registry, criteria, format)?;
        }

        Commands::Show { state, kind, id } => {
            let registry = commands::search::open_state(&state, config)?;
            commands::show::execute(&registry, kind, id, format)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
