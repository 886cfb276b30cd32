use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// File merged by [`GatewayConfig::load`], relative to the working directory.
pub const CONFIG_FILE: &str = "fhegate.toml";

/// Prefix of environment overrides, e.g. `FHEGATE_CODEC__MAX_CIPHERTEXT_BYTES`.
pub const ENV_PREFIX: &str = "FHEGATE_";

/// Gateway configuration. Key-generation parameters are the engine defaults
/// and are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Inputs longer than this are rejected before reaching the engine.
    #[serde(default = "default_max_ciphertext_bytes")]
    pub max_ciphertext_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_ciphertext_bytes: default_max_ciphertext_bytes(),
        }
    }
}

fn default_max_ciphertext_bytes() -> usize {
    16 << 20
}

impl GatewayConfig {
    /// Merges [`CONFIG_FILE`] (if present) and `FHEGATE_` environment variables
    /// over the defaults.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: GatewayConfig = figment.extract().map_err(|e| GatewayError::Config(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.codec.max_ciphertext_bytes == 0 {
            return Err(GatewayError::Config(Box::new(figment::Error::from(
                "codec.max_ciphertext_bytes must be nonzero".to_string(),
            ))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment,
        providers::{Format, Toml},
    };

    use super::*;

    #[test]
    fn empty_provider_yields_defaults() {
        let config: GatewayConfig = GatewayConfig::from_figment(Figment::new()).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.codec.max_ciphertext_bytes, 16 << 20);
    }

    #[test]
    fn toml_overrides_codec_limit() {
        let figment: Figment = Figment::new().merge(Toml::string("[codec]\nmax_ciphertext_bytes = 4096\n"));
        let config: GatewayConfig = GatewayConfig::from_figment(figment).unwrap();
        assert_eq!(config.codec.max_ciphertext_bytes, 4096);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let figment: Figment = Figment::new().merge(Toml::string("[codec]\nmax_ciphertext_bytes = 0\n"));
        assert!(matches!(GatewayConfig::from_figment(figment), Err(GatewayError::Config(_))));
    }

    #[test]
    fn load_merges_file_and_nested_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[codec]\nmax_ciphertext_bytes = 1024\n")?;
            let from_file: GatewayConfig = GatewayConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(from_file.codec.max_ciphertext_bytes, 1024);

            jail.set_env("FHEGATE_CODEC__MAX_CIPHERTEXT_BYTES", 2048);
            let from_env: GatewayConfig = GatewayConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(from_env.codec.max_ciphertext_bytes, 2048);
            Ok(())
        });
    }

    #[test]
    fn load_without_file_or_env_yields_defaults() {
        figment::Jail::expect_with(|_| {
            let config: GatewayConfig = GatewayConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, GatewayConfig::default());
            Ok(())
        });
    }

    #[test]
    fn env_zero_limit_is_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FHEGATE_CODEC__MAX_CIPHERTEXT_BYTES", 0);
            assert!(matches!(GatewayConfig::load(), Err(GatewayError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let figment: Figment = Figment::new().merge(Toml::string("[codec]\nmax_ciphertext_bytes = \"lots\"\n"));
        assert!(matches!(GatewayConfig::from_figment(figment), Err(GatewayError::Config(_))));
    }
}
