use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_DATE_RANGE_DAYS, DEFAULT_PAGE_SIZE};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// How the "my events" view orders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalizedOrdering {
    /// Coarse start-date order in storage, then a future/past pass over the
    /// loaded page. Only ordered within a page; events starting exactly now
    /// are dropped.
    #[default]
    Page,
    /// The future/past key is part of the storage ordering, so it holds across
    /// pages.
    Global,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    pub page_size: u32,
    pub max_date_range_days: u32,
    #[serde(default)]
    pub personalized_ordering: PersonalizedOrdering,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_date_range_days: DEFAULT_MAX_DATE_RANGE_DAYS,
            personalized_ordering: PersonalizedOrdering::default(),
        }
    }
}

impl EventsConfig {
    /// ## Summary
    /// Rejects values the listing service cannot page or validate with.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` for a zero page size or zero maximum range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfiguration(
                "events.page_size must be positive".to_owned(),
            ));
        }
        if self.max_date_range_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "events.max_date_range_days must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder preloaded with defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("events.page_size", i64::from(DEFAULT_PAGE_SIZE))?
            .set_default(
                "events.max_date_range_days",
                i64::from(DEFAULT_MAX_DATE_RANGE_DAYS),
            )?
            .set_default("events.personalized_ordering", "page")?)
    }

    /// ## Summary
    /// Loads configuration from `config.toml` and environment variables into a `Settings`.
    /// Environment variables (`GATHER_EVENTS__PAGE_SIZE`, ...) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("GATHER")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.events.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
