use chrono_tz::Tz;

/// Gate configuration - all runtime settings for the check-in service
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATA_PATH | ./muelle-data.json | Workbook store location |
/// | TIMEZONE | Europe/Madrid | Business timezone for "today" |
/// | ENVIRONMENT | development | Runtime environment |
/// | TIME_STEP_MINUTES | 5 | Minute granularity of suggested times |
///
/// # Example
///
/// ```ignore
/// DATA_PATH=/var/lib/muelle/gate.json TIMEZONE=Europe/Madrid cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON workbook store
    pub data_path: String,
    /// Business timezone; "today" and all wall-clock times are scoped to it
    pub timezone: Tz,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Minute granularity for suggested arrival/service times
    pub time_step_minutes: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults above; an unparseable
    /// TIMEZONE falls back too rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("DATA_PATH").unwrap_or_else(|_| "./muelle-data.json".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Europe::Madrid),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            time_step_minutes: std::env::var("TIME_STEP_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Override the data path on a loaded configuration.
    ///
    /// Mostly used by tests
    pub fn with_overrides(data_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_path = data_path.into();
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
