//! Decimal degrees to display strings.

use crate::sexagesimal::SexagesimalTriple;
use crate::types::{Coordinate, CoordinateFormats, FormatOutcome};
use crate::validation::validate_coordinate_inputs;
use log::debug;

/// Fractional digits on every seconds field.
pub const SECONDS_DECIMALS: usize = 3;
/// Fractional digits on the raw decimal-hours / decimal-degrees form.
pub const RAW_DECIMALS: usize = 8;

const DEGREES_TO_HOURS: f64 = 24.0 / 360.0;

/// Validates `ra_deg` and `dec_deg` and renders all five styles.
///
/// Each violated bound adds one line to `error_message`; on any violation
/// `valid_inputs` is false and every form is empty.
pub fn format_coordinate(ra_deg: f64, dec_deg: f64) -> FormatOutcome {
    match validate_coordinate_inputs(ra_deg, dec_deg) {
        Ok((ra, dec)) => match Coordinate::new(ra, dec) {
            Ok(coordinate) => FormatOutcome::from(try_format_coordinate(&coordinate)),
            Err(err) => FormatOutcome::invalid(&[err]),
        },
        Err(errors) => {
            debug!("rejected format input ra={} dec={}", ra_deg, dec_deg);
            FormatOutcome::invalid(&errors)
        }
    }
}

pub fn try_format_coordinate(coordinate: &Coordinate) -> CoordinateFormats {
    let digits = SECONDS_DECIMALS as u32;
    let ra_dms = SexagesimalTriple::from_decimal(coordinate.right_ascension())
        .rounded(digits, Some(360.0));
    let ra_hms = SexagesimalTriple::from_decimal(coordinate.right_ascension() * DEGREES_TO_HOURS)
        .rounded(digits, Some(24.0));
    let dec_dms = SexagesimalTriple::from_decimal(coordinate.declination()).rounded(digits, None);

    let [rh, rm, rs] = ra_hms.fields(SECONDS_DECIMALS);
    let [rd, rdm, rds] = ra_dms.fields(SECONDS_DECIMALS);
    let [dd, dm, ds] = dec_dms.fields(SECONDS_DECIMALS);

    CoordinateFormats {
        colon: format!("{}:{}:{} {}:{}:{}", rh, rm, rs, dd, dm, ds),
        hms: format!("{}h{}m{}s {}d{}m{}s", rh, rm, rs, dd, dm, ds),
        space: format!("{} {} {} {} {} {}", rh, rm, rs, dd, dm, ds),
        dms: format!("{}d{}m{}s {}d{}m{}s", rd, rdm, rds, dd, dm, ds),
        raw_decimal: format!(
            "{:.*}h {:.*}d",
            RAW_DECIMALS,
            coordinate.right_ascension() * DEGREES_TO_HOURS,
            RAW_DECIMALS,
            coordinate.declination()
        ),
    }
}
