use anyhow::Context;
use warden_config::WardenConfig;
use warden_db::service::WardenService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: WardenService,
    pub config: WardenConfig,
}

impl AppContext {
    /// Open the database named by `db_override`, or by `database.path` from
    /// config. Missing parent directories are created.
    pub async fn init(config: WardenConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = config;
        if let Some(path) = db_override {
            config.database.path = path.to_string();
        }

        if let Some(parent) = config.database.parent_dir()
            && !parent.is_dir()
        {
            std::fs::create_dir_all(&parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
            tracing::debug!(dir = %parent.display(), "created database directory");
        }

        let service = WardenService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self { service, config })
    }

    /// Context over a fresh in-memory database, for handler tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        Self::init(WardenConfig::default(), Some(":memory:"))
            .await
            .expect("in-memory context")
    }
}
