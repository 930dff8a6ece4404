mod api_models;
mod app_config;
mod error;
#[cfg(test)]
mod test;
mod validation;

use app_config::AppConfig;
use error::SkyDriveError;
use tracing::info;

fn main() -> Result<(), SkyDriveError> {
    tracing_subscriber::fmt().init();

    let config = AppConfig::build()?;
    info!("Loaded configuration for {}", config.main_name);
    info!(
        "Resource listing endpoint resolves to {}",
        config.api_endpoint("/resource")
    );

    // Dump the effective configuration so operators can see what the
    // layered sources resolved to.
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
