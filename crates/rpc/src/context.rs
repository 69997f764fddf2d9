//! Application context - wires settings, config and rates together

use kayicom_fees::{FeeConfig, FeeError, SettingsSnapshot};
use kayicom_rates::{ExchangeRates, FixedRateSource, RateConverter, RateError, RateSource};
use std::path::{Path, PathBuf};

/// Application context
///
/// Holds one settings snapshot for the lifetime of a command; refreshing it
/// means building a new context.
pub struct AppContext {
    pub config: FeeConfig,
    pub settings: SettingsSnapshot,
    pub rates: FixedRateSource,
}

impl AppContext {
    /// Load settings (and optionally a fee config) from disk
    pub async fn new(
        settings_path: impl AsRef<Path>,
        config_path: Option<&Path>,
    ) -> Result<Self, ContextError> {
        let settings_path = settings_path.as_ref();

        let settings = SettingsSnapshot::from_file(settings_path).map_err(|source| {
            ContextError::Settings {
                path: settings_path.to_path_buf(),
                source,
            }
        })?;

        let config = match config_path {
            Some(path) => FeeConfig::from_file(path).map_err(|source| ContextError::Config {
                path: path.to_path_buf(),
                source,
            })?,
            None => FeeConfig::default(),
        };

        let ctx = Self::from_parts(config, settings)?;
        tracing::debug!(path = %settings_path.display(), "Settings loaded");
        Ok(ctx)
    }

    /// Build a context from already-loaded parts
    pub fn from_parts(config: FeeConfig, settings: SettingsSnapshot) -> Result<Self, ContextError> {
        let rates = FixedRateSource::new();

        // Both directions must be published; neither is derived from the other
        let usd_to_htg = settings.agent.as_ref().map(|agent| agent.rate_usd_to_htg);
        let htg_to_usd = settings.app_config.htg_to_usd;
        if let (Some(usd_to_htg), Some(htg_to_usd)) = (usd_to_htg, htg_to_usd) {
            rates.set_rates(ExchangeRates::new(usd_to_htg, htg_to_usd)?);
        }

        Ok(Self {
            config,
            settings,
            rates,
        })
    }

    /// Converter for the currently published rate pair
    pub async fn converter(&self) -> Result<RateConverter, RateError> {
        let rates = self.rates.current_rates().await?;
        Ok(RateConverter::new(rates))
    }
}

/// Errors while building the context
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Failed to load settings from {}: {source}", .path.display())]
    Settings { path: PathBuf, source: FeeError },

    #[error("Failed to load fee config from {}: {source}", .path.display())]
    Config { path: PathBuf, source: FeeError },

    #[error("Invalid exchange rates: {0}")]
    Rates(#[from] RateError),
}
