//! Core foundation for Cirrus: configuration, error taxonomy, observable
//! values, the bounded-race primitive, and durable key-value preferences.

pub mod config;
pub mod error;
pub mod observable;
pub mod race;
pub mod store;

pub use config::{Config, TemperatureUnit, WeatherConfig};
pub use error::{AuthError, BackendError, Timeout};
pub use observable::Observable;
pub use store::{FileStore, MemoryStore, PreferenceStore};

use anyhow::Result;

/// Initialize logging for the application.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Cirrus core initialized");
    Ok(())
}
