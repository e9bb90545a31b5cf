//! Weather data layer for Cirrus.
//!
//! Typed snapshots from the hosted weather provider, a process-lifetime
//! cache with stale-while-revalidate semantics, and the sync controller
//! that reconciles concurrent refresh triggers into one observable state.

pub mod cache;
pub mod client;
pub mod location;
pub mod sync;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::WeatherCache;
pub use client::WeatherClient;
pub use location::{AuthorizationState, Coordinates, LocationError, LocationProvider, LocationTrigger};
pub use sync::{SyncController, FORECAST_DAYS};
pub use types::{
    Condition, CurrentConditions, DayConditions, Forecast, ForecastDay, ForecastSnapshot,
    Location, QuickSnapshot, WeatherError,
};
