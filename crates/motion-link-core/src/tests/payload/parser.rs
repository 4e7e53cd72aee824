use crate::{PayloadError, Sample, decode_payload, parse_series};

/// WHAT: A payload mixing good, bad, and over-wide rows parses selectively
/// WHY: Malformed rows must be skipped without aborting or reordering
#[test]
fn given_mixed_payload_when_parsing_then_only_valid_rows_survive_in_order() {
    // Given: header, one good row, one short row, one row with extras
    let text = "header\n0.1,0.2,0.3\nbad,row\n0.4,0.5,0.6,extra\n";

    // When: Parsing the payload
    let series = parse_series(text);

    // Then: The short row is skipped, the fourth field ignored
    assert_eq!(
        series,
        vec![Sample::new(0.1, 0.2, 0.3), Sample::new(0.4, 0.5, 0.6)]
    );
}

/// WHAT: Empty input parses to an empty series
/// WHY: No decodable rows is a valid outcome, not an error
#[test]
fn given_empty_text_when_parsing_then_series_is_empty() {
    // Given: Empty payload text
    let text = "";

    // When: Parsing
    let series = parse_series(text);

    // Then: Empty series, no failure
    assert!(series.is_empty());
}

/// WHAT: A header-only payload parses to an empty series
/// WHY: The first line is discarded regardless of content
#[test]
fn given_header_only_when_parsing_then_series_is_empty() {
    let series = parse_series("acceleration_x,acceleration_y,acceleration_z\n");

    assert!(series.is_empty());
}

/// WHAT: The first line is dropped even when it looks like data
/// WHY: Line one is a header by position, not by content
#[test]
fn given_numeric_first_line_when_parsing_then_it_is_still_discarded() {
    // Given: A payload whose header row would parse as a sample
    let text = "1.0,2.0,3.0\n4.0,5.0,6.0\n";

    // When: Parsing
    let series = parse_series(text);

    // Then: Only the second line survives
    assert_eq!(series, vec![Sample::new(4.0, 5.0, 6.0)]);
}

/// WHAT: Windows line endings do not corrupt numeric parsing
/// WHY: The sensor peer may emit \r\n terminated payloads
#[test]
fn given_crlf_payload_when_parsing_then_rows_parse_cleanly() {
    let text = "header\r\n0.1,0.2,0.3\r\n0.4,0.5,0.6\r\n";

    let series = parse_series(text);

    assert_eq!(
        series,
        vec![Sample::new(0.1, 0.2, 0.3), Sample::new(0.4, 0.5, 0.6)]
    );
}

/// WHAT: Non-finite fields disqualify a row
/// WHY: Downstream consumers require finite axis values
#[test]
fn given_non_finite_fields_when_parsing_then_rows_are_skipped() {
    // Given: Rows carrying inf and NaN in an axis field
    let text = "header\ninf,0.2,0.3\n0.1,NaN,0.3\n0.7,0.8,0.9\n";

    // When: Parsing
    let series = parse_series(text);

    // Then: Only the finite row survives
    assert_eq!(series, vec![Sample::new(0.7, 0.8, 0.9)]);
}

/// WHAT: Parsing the same text twice yields equal series
/// WHY: The parser is pure; no state may leak between calls
#[test]
fn given_same_text_when_parsing_twice_then_results_are_equal() {
    let text = "header\n0.1,0.2,0.3\nbad\n0.4,0.5,0.6\n";

    let first = parse_series(text);
    let second = parse_series(text);

    assert_eq!(first, second);
}

/// WHAT: Surrounding whitespace on fields is tolerated
/// WHY: Hand-edited or padded payloads should still decode
#[test]
fn given_padded_fields_when_parsing_then_values_parse() {
    let series = parse_series("header\n 0.1 , 0.2 , 0.3 \n");

    assert_eq!(series, vec![Sample::new(0.1, 0.2, 0.3)]);
}

/// WHAT: Valid UTF-8 bytes decode to the original text
/// WHY: The transfer receiver decodes persisted bytes before parsing
#[test]
#[allow(clippy::unwrap_used)]
fn given_utf8_bytes_when_decoding_then_text_matches() {
    // Given: Payload bytes containing multibyte characters
    let text = "header\n0.1,0.2,0.3\n";

    // When: Decoding
    let decoded = decode_payload(text.as_bytes()).unwrap();

    // Then: Text round-trips
    assert_eq!(decoded, text);
}

/// WHAT: Invalid UTF-8 bytes fail with NotText
/// WHY: Decode failure must be distinguishable from persist failure
#[test]
fn given_invalid_utf8_when_decoding_then_not_text_error() {
    // Given: Bytes that cannot be UTF-8
    let bytes = [0x66, 0x6f, 0xff, 0xfe];

    // When: Decoding
    let result = decode_payload(&bytes);

    // Then: NotText error
    assert!(matches!(result, Err(PayloadError::NotText { .. })));
}
