//! PIN code / area validator executable
//!
//! Validates each address in turn and prints the verdict to stdout.
//! Logs go to stderr; set RUST_LOG to adjust verbosity.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use pincode_core::{AddressValidator, PostalPincodeClient, ValidatorConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = Command::new("pincode-validator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks that an address's PIN code belongs to the area it names")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON configuration file path")
        )
        .arg(
            Arg::new("addresses")
                .value_name("ADDRESS")
                .help("Addresses to validate (defaults to the configured or sample addresses)")
                .action(ArgAction::Append)
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = ValidatorConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => ValidatorConfig::default(),
    };

    let addresses: Vec<String> = match matches.get_many::<String>("addresses") {
        Some(values) => values.cloned().collect(),
        None => config.addresses.clone(),
    };

    let client = PostalPincodeClient::new(config.postal_api.clone())
        .context("Failed to create PIN code directory client")?;
    let validator = AddressValidator::new(Arc::new(client));

    log::info!("Validating {} address(es) against {}", addresses.len(), config.postal_api.base_url);

    // One at a time; each lookup completes before the next address starts
    for address in &addresses {
        let result = validator.validate(address).await;
        println!("Address: {}\nResult: {}\n", address, result.message());
    }

    Ok(())
}
