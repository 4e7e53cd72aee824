use crate::config::default_sample_rate_hz;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Peer link configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Sample rate the simulated sensor peer captures at, in hertz.
    #[serde(default = "default_sample_rate_hz")]
    pub sample_rate_hz: u32,
}

impl LinkConfig {
    /// Interval between captured samples.
    pub fn sample_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.sample_rate_hz.max(1)))
    }
}
