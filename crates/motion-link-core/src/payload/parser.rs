//! Payload text parsing.
//!
//! Turns the raw transferred text into a [`Series`]. The parser is total:
//! any input yields a (possibly empty) series, and a malformed row never
//! aborts parsing of the rows after it.

use crate::{
    error::{PayloadError, Result as CoreResult},
    payload::sample::{Sample, Series},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::trace;

/// Decode received payload bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`PayloadError::NotText`] if the bytes are not valid UTF-8.
#[track_caller]
pub fn decode_payload(bytes: &[u8]) -> CoreResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|source| PayloadError::NotText {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse payload text into a series of samples.
///
/// The first line is always discarded as a header, whatever it contains.
/// Each remaining line is split on `,`; a line becomes a sample only if
/// its first three fields all parse as finite reals. Lines that fail are
/// skipped without disturbing the order of the survivors. Extra trailing
/// fields are ignored. `\r\n` line endings are tolerated.
pub fn parse_series(text: &str) -> Series {
    let series: Series = text.lines().skip(1).filter_map(parse_row).collect();

    trace!(rows = series.len(), "Payload parsed");

    series
}

fn parse_row(line: &str) -> Option<Sample> {
    let mut fields = line.split(',');

    let axis_x = parse_axis(fields.next()?)?;
    let axis_y = parse_axis(fields.next()?)?;
    let axis_z = parse_axis(fields.next()?)?;

    Some(Sample::new(axis_x, axis_y, axis_z))
}

fn parse_axis(field: &str) -> Option<f64> {
    let value: f64 = field.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
