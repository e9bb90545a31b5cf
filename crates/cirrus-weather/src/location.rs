//! Location trigger: adapts one-shot coordinate acquisition into weather
//! requests, gated by the location-enabled preference.

use std::future::Future;

use thiserror::Error;

use cirrus_core::Observable;

use crate::sync::SyncController;

/// A device coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location acquisition errors.
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Authorization state machine driven by each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationState {
    #[default]
    NotDetermined,
    Requesting,
    Granted,
    Denied,
}

/// One-shot coordinate source. The real implementation wraps the platform
/// location sensor; tests substitute fixed or failing providers.
pub trait LocationProvider {
    fn current_position(&self)
        -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

pub struct LocationTrigger<P> {
    provider: P,
    enabled: Observable<bool>,
    state: Observable<AuthorizationState>,
    error: Observable<Option<String>>,
}

impl<P: LocationProvider> LocationTrigger<P> {
    pub fn new(provider: P, enabled: Observable<bool>) -> Self {
        Self {
            provider,
            enabled,
            state: Observable::new(AuthorizationState::default()),
            error: Observable::new(None),
        }
    }

    pub fn state(&self) -> &Observable<AuthorizationState> {
        &self.state
    }

    /// Denial is sticky here until a later request is granted.
    pub fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Acquire the device position once and forward it to the sync
    /// controller as a `"lat,lon"` query.
    ///
    /// A no-op while the location preference is off; the preference is
    /// re-checked at delivery because it can flip while the acquisition is
    /// in flight.
    pub async fn request_location(&self, sync: &SyncController) {
        if !self.enabled.get() {
            tracing::debug!("Location requests disabled by preference");
            return;
        }

        self.state.set(AuthorizationState::Requesting);

        match self.provider.current_position().await {
            Ok(coords) => {
                self.state.set(AuthorizationState::Granted);
                self.error.set(None);

                if !self.enabled.get() {
                    tracing::debug!("Location preference turned off mid-request; dropping fix");
                    return;
                }

                let query = format!("{},{}", coords.latitude, coords.longitude);
                if let Err(e) = sync.request(&query).await {
                    // The controller already published this to its error slot.
                    tracing::warn!("Location-triggered refresh failed: {}", e);
                }
            }
            Err(LocationError::PermissionDenied) => {
                self.state.set(AuthorizationState::Denied);
                self.error
                    .set(Some("Location access denied. Please enable in settings.".to_string()));
            }
            Err(e) => {
                tracing::warn!("Location request failed: {}", e);
                self.state.set(AuthorizationState::NotDetermined);
                self.error.set(Some(format!("Failed to get location: {e}")));
            }
        }
    }
}
