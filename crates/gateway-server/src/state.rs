//! Shared application state.

use std::sync::Arc;

use gateway_core::{Clock, SystemClock};
use gateway_protocol::FixedWidthEncoder;

/// Shared clock handle; the encoder and response timestamps read the same one.
pub type SharedClock = Arc<dyn Clock>;

/// Cloned into every handler. Holds nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub encoder: FixedWidthEncoder<SharedClock>,
}

impl AppState {
    /// State backed by the host clock.
    pub fn new() -> Self {
        AppState::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        AppState {
            encoder: FixedWidthEncoder::with_clock(clock),
        }
    }

    pub fn clock(&self) -> &SharedClock {
        self.encoder.clock()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
