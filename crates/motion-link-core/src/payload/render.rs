use crate::payload::sample::Sample;

use std::fmt::Write;

/// Header line the sensor peer writes above its rows.
pub const PAYLOAD_HEADER: &str = "acceleration_x,acceleration_y,acceleration_z";

/// Render a series to payload text, header line included.
///
/// Inverse of [`parse_series`](crate::parse_series): rendering and
/// re-parsing a series reproduces it exactly, since `f64` display output
/// round-trips.
pub fn render_series(series: &[Sample]) -> String {
    let mut text = String::with_capacity(PAYLOAD_HEADER.len() + series.len() * 24);

    text.push_str(PAYLOAD_HEADER);
    text.push('\n');

    for sample in series {
        // write! to a String cannot fail
        let _ = writeln!(text, "{},{},{}", sample.axis_x, sample.axis_y, sample.axis_z);
    }

    text
}
