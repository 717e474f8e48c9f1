use anyhow::Context;
use warden_config::WardenConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<WardenConfig> {
    let config = WardenConfig::load_with_dotenv().context("failed to load warden configuration")?;
    tracing::debug!(
        database = %config.database.path,
        timezone = %config.general.default_timezone,
        "loaded configuration"
    );
    Ok(config)
}
