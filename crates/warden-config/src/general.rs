//! General application configuration.

use serde::{Deserialize, Serialize};
use warden_core::timezone::DEFAULT_TIMEZONE;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// IANA zone applied to `--created-from`/`--created-to` when the command
    /// line does not name one.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_timezone: default_timezone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.default_timezone, "UTC");
    }
}
