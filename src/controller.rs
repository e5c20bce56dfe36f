//! The generation trigger: one request/response cycle per activation.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error};

use crate::client::GenerationService;
use crate::constants::TRIGGER_BUSY_LABEL;
use crate::display::DisplaySurface;
use crate::models::GenerationRequest;

/// Where the controller is in its cycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UiState {
    /// Nothing has run yet, or the last activation did nothing
    #[default]
    Idle,
    /// A request is outstanding
    InFlight,
    /// The last cycle rendered a result
    Success,
    /// The last cycle ended with an alert
    Error,
}

/// Holds the trigger control in its busy state until dropped.
///
/// Dropping restores the control however the cycle ended, including a panic
/// or the future being dropped mid-flight.
struct BusyGuard<'a, S: DisplaySurface + ?Sized> {
    surface: &'a S,
    state: &'a Mutex<UiState>,
    label: &'a str,
}

impl<'a, S: DisplaySurface + ?Sized> BusyGuard<'a, S> {
    fn acquire(surface: &'a S, state: &'a Mutex<UiState>, label: &'a str) -> Self {
        surface.set_trigger_enabled(false);
        surface.set_trigger_label(TRIGGER_BUSY_LABEL);
        *state.lock().unwrap_or_else(PoisonError::into_inner) = UiState::InFlight;
        Self {
            surface,
            state,
            label,
        }
    }
}

impl<S: DisplaySurface + ?Sized> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == UiState::InFlight {
            *state = UiState::Error;
        }
        drop(state);
        self.surface.set_trigger_enabled(true);
        self.surface.set_trigger_label(self.label);
    }
}

/// Drives a [`GenerationService`] from a [`DisplaySurface`].
#[derive(Debug)]
pub struct GenerationTrigger<G, S> {
    service: G,
    surface: Arc<S>,
    idle_label: String,
    state: Mutex<UiState>,
}

impl<G, S> GenerationTrigger<G, S>
where
    G: GenerationService,
    S: DisplaySurface,
{
    /// Wires a service to the surface it reads inputs from and renders into.
    ///
    /// The trigger control's label at this point is the one restored after
    /// every cycle.
    pub fn new(service: G, surface: Arc<S>) -> Self {
        let idle_label = surface.trigger_label();
        Self {
            service,
            surface,
            idle_label,
            state: Mutex::new(UiState::Idle),
        }
    }

    /// The state after the most recent transition.
    pub fn state(&self) -> UiState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The service this trigger calls.
    pub fn service(&self) -> &G {
        &self.service
    }

    /// Handles one activation of the trigger control.
    ///
    /// Returns [`UiState::Idle`] when no request was made, otherwise how the
    /// cycle ended. A missing topic also puts [`Self::state`] back to `Idle`;
    /// activating a disabled control changes nothing. Failures never escape:
    /// they are alerted and logged here.
    pub async fn trigger(&self) -> UiState {
        let surface = self.surface.as_ref();
        if !surface.is_trigger_enabled() {
            debug!("Trigger control disabled, ignoring activation");
            return UiState::Idle;
        }

        let request = match GenerationRequest::from_inputs(
            &surface.topic_value(),
            &surface.top_text_value(),
            &surface.bottom_text_value(),
        ) {
            Ok(request) => request,
            Err(err) => {
                *self.state.lock().unwrap_or_else(PoisonError::into_inner) = UiState::Idle;
                surface.alert(&err.user_message());
                return UiState::Idle;
            }
        };

        let _busy = BusyGuard::acquire(surface, &self.state, &self.idle_label);

        let outcome = match self.service.generate(&request).await {
            Ok(response) => {
                surface.set_caption(response.caption_text());
                surface.set_image_source(&response.data_uri());
                surface.reveal_result();
                UiState::Success
            }
            Err(err) => {
                error!("Generation failed for {:?}: {err}", request.topic);
                surface.alert(&format!("Error: {}", err.user_message()));
                UiState::Error
            }
        };

        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = outcome;
        outcome
    }
}
