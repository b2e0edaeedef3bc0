use clap::Parser;
use mint::config::{AppConfig, OutputFormat};
use mint::fixup::{self, FIXUP_TOTAL_TOKEN_NUMBER};
use mint::genesis::GenesisState;
use shared::error::{
    AsConfigError, AsSerializationError, AsValidationError, MainError,
};

fn main() -> Result<(), MainError> {
    let config = AppConfig::parse();

    config.log.init();

    tracing::info!("version: {}", env!("CARGO_PKG_VERSION"));

    let genesis = match &config.genesis_file {
        Some(path) => {
            tracing::info!("Loading mint params from {}", path.display());
            GenesisState::from_json_file(path).into_config_error()?
        }
        None => {
            tracing::info!("No genesis file given, using default mint params");
            GenesisState::default()
        }
    };

    genesis.validate().into_validation_error()?;

    tracing::info!(denom = %genesis.params.mint_denom, "Mint params are valid");

    match config.output {
        OutputFormat::Text => print!("{}", genesis.params),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&genesis.params)
                .into_serialization_error()?
        ),
    }

    if config.fixup_schedule {
        print_fixup_schedule(config.output).into_serialization_error()?;
    }

    Ok(())
}

fn print_fixup_schedule(output: OutputFormat) -> serde_json::Result<()> {
    match output {
        OutputFormat::Text => {
            println!("Bootstrap Inflation:");
            for (year, rate) in fixup::fixup_schedule() {
                println!("  Year {}:                 {}", year, rate);
            }
            println!("  Total Token Number:     {}", FIXUP_TOTAL_TOKEN_NUMBER);
        }
        OutputFormat::Json => {
            let rates = fixup::fixup_schedule()
                .map(|(year, rate)| {
                    Ok::<_, serde_json::Error>((
                        year.to_string(),
                        serde_json::to_value(rate)?,
                    ))
                })
                .collect::<serde_json::Result<serde_json::Map<_, _>>>()?;
            let schedule = serde_json::json!({
                "fixup_inflation": rates,
                "fixup_total_token_number": FIXUP_TOTAL_TOKEN_NUMBER.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }

    Ok(())
}
