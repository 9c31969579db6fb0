//! Muelle Gate - supplier check-in and service-time tracking
//!
//! The gate crate wires the pure order status & duration engine to its two
//! collaborators, a snapshot store and a clock, behind a headless check-in
//! service the interaction flows drive.
//!
//! # Module structure
//!
//! ```text
//! muelle-gate/src/
//! ├── config.rs    # env-driven runtime configuration
//! ├── clock.rs     # business-timezone clock collaborator
//! ├── engine/      # pure status & duration computation
//! ├── store/       # workbook snapshot store (memory, JSON file)
//! ├── service.rs   # load → engine → save check-in service
//! ├── flow.rs      # explicit wizard step state for multi-step callers
//! └── logger.rs    # tracing setup
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod flow;
pub mod logger;
pub mod service;
pub mod store;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use flow::{CheckInWizard, WizardStep};
pub use service::{DayBoardEntry, GateService};
pub use store::{DataStore, JsonFileStore, MemoryStore};

// Re-export logger functions
pub use logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment.
///
/// Call once at binary startup, before [`Config::from_env`].
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok();

    logger::init_logger_with_file(&level, json_format, log_dir.as_deref())
}
