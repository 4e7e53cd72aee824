use crate::{PAYLOAD_HEADER, Sample, parse_series, render_series};

use approx::assert_relative_eq;

/// WHAT: Rendered series round-trip through the parser
/// WHY: The sensor peer renders exactly what the controller peer parses
#[test]
fn given_rendered_series_when_parsing_then_samples_round_trip() {
    // Given: A synthetic series of well-formed samples
    let original: Vec<Sample> = (0..32)
        .map(|i| {
            let t = f64::from(i) * 0.02;
            Sample::new(t.sin() * 0.5, t.cos() * 0.3, 9.81 + (t * 3.0).sin() * 0.1)
        })
        .collect();

    // When: Rendering to text and parsing it back
    let text = render_series(&original);
    let parsed = parse_series(&text);

    // Then: Same length, same order, same values within tolerance
    assert_eq!(parsed.len(), original.len());
    for (parsed, original) in parsed.iter().zip(&original) {
        assert_relative_eq!(parsed.axis_x, original.axis_x, max_relative = 1e-12);
        assert_relative_eq!(parsed.axis_y, original.axis_y, max_relative = 1e-12);
        assert_relative_eq!(parsed.axis_z, original.axis_z, max_relative = 1e-12);
    }
}

/// WHAT: Rendered text starts with the header line
/// WHY: The parser discards line one, so the renderer must spend it
#[test]
#[allow(clippy::unwrap_used)]
fn given_any_series_when_rendering_then_header_is_first_line() {
    let text = render_series(&[Sample::new(0.1, 0.2, 0.3)]);

    assert_eq!(text.lines().next().unwrap(), PAYLOAD_HEADER);
}

/// WHAT: An empty series renders to a header-only payload
/// WHY: Stop immediately after start produces zero captured rows
#[test]
fn given_empty_series_when_rendering_then_parsing_yields_empty() {
    let text = render_series(&[]);

    assert!(parse_series(&text).is_empty());
}
