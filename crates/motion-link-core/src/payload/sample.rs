use serde::{Deserialize, Serialize};

/// One motion reading: acceleration along three axes.
///
/// Samples carry no identity beyond their position in a [`Series`];
/// that position defines display order downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Acceleration along the X axis.
    pub axis_x: f64,
    /// Acceleration along the Y axis.
    pub axis_y: f64,
    /// Acceleration along the Z axis.
    pub axis_z: f64,
}

impl Sample {
    /// Create a sample from its three axis readings.
    pub fn new(axis_x: f64, axis_y: f64, axis_z: f64) -> Self {
        Self {
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// Euclidean magnitude across the three axes.
    pub fn magnitude(&self) -> f64 {
        (self.axis_x * self.axis_x + self.axis_y * self.axis_y + self.axis_z * self.axis_z).sqrt()
    }
}

/// An ordered sequence of samples from one parsed payload.
///
/// Insertion order is parse order. An empty series is valid and means
/// the payload had no decodable rows.
pub type Series = Vec<Sample>;
