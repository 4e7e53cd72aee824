//! Motion-Link Core Library
//!
//! Payload handling for paired-device motion recordings: typed samples,
//! the delimited-text parser, and its rendering inverse.
//!
//! # Example
//!
//! ```
//! use motion_link_core::{parse_series, render_series, Sample};
//!
//! let captured = vec![Sample::new(0.12, -0.98, 0.05)];
//! let payload = render_series(&captured);
//! let series = parse_series(&payload);
//!
//! assert_eq!(series, captured);
//! ```

mod error;
mod payload;

pub use {
    error::{PayloadError, Result as CoreResult},
    payload::{PAYLOAD_HEADER, Sample, Series, decode_payload, parse_series, render_series},
};

#[cfg(test)]
mod tests;
