#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use radec::{parse_coordinate_string, CoordinateError, ParseOutcome};

/// RA/Dec of the reference star used across the tests, in degrees.
pub const REFERENCE_RA: f64 = 84.2911875;
pub const REFERENCE_DEC: f64 = -80.4691197222;

/// Parse `input` and assert it is accepted at `(ra, dec)` within `tolerance` degrees.
pub fn assert_parses_to(input: &str, ra: f64, dec: f64, tolerance: f64) -> ParseOutcome {
    let outcome = parse_coordinate_string(input);
    assert!(
        outcome.accepted,
        "expected {:?} to parse, got error: {}",
        input, outcome.error_message
    );
    assert!(outcome.error_message.is_empty());
    assert_abs_diff_eq!(outcome.coordinate.right_ascension(), ra, epsilon = tolerance);
    assert_abs_diff_eq!(outcome.coordinate.declination(), dec, epsilon = tolerance);
    outcome
}

/// Parse `input` and assert it is rejected with the default coordinate.
pub fn assert_rejected(input: &str) -> CoordinateError {
    let outcome = parse_coordinate_string(input);
    assert!(!outcome.accepted, "expected {:?} to be rejected", input);
    assert!(!outcome.error_message.is_empty());
    assert_eq!(outcome.coordinate.right_ascension(), 0.0);
    assert_eq!(outcome.coordinate.declination(), 0.0);
    outcome
        .error()
        .cloned()
        .expect("rejected outcome carries an error")
}
