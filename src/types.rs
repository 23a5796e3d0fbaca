use crate::validation::{is_valid_declination, is_valid_right_ascension};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid range of RA: {ra} [0-360 deg) or declination: {dec} [-90 - 90 deg]")]
    OutOfRange { ra: f64, dec: f64 },
    #[error(
        "Invalid range of ra hour: {hour} [0-24 hr) or minutes: {minutes} [0-60 min) or seconds: {seconds} [0-60 sec)"
    )]
    RightAscensionComponents {
        hour: f64,
        minutes: f64,
        seconds: f64,
    },
    #[error(
        "Invalid range of declination deg: {degrees} [-90 - 90 deg] or minutes: {minutes} [0-60 min) or seconds: {seconds} [0-60 sec)"
    )]
    DeclinationComponents {
        degrees: f64,
        minutes: f64,
        seconds: f64,
    },
    #[error("Too many colons encountered in requested ra or dec {0}")]
    TooManyColons(String),
    #[error("Malformed {field} value '{text}' in input {input}")]
    MalformedNumber {
        field: &'static str,
        text: String,
        input: String,
    },
    #[error("Could not find handler for input {0}")]
    NoHandler(String),
    #[error("Unexpected validation error for {input} ra [deg] {ra} dec [deg] {dec}")]
    Inconsistent { input: String, ra: f64, dec: f64 },
    #[error("Invalid RA input: {0} - RA must be within range 0<=RA<360")]
    InvalidRightAscension(f64),
    #[error("Invalid Dec input: {0} - Declination must be within range -90<=Dec<=90")]
    InvalidDeclination(f64),
}

/// A validated equatorial position in decimal degrees.
///
/// Right ascension lies in `[0, 360)` and declination in `[-90, 90]`. The only ways
/// to obtain one are [`Coordinate::new`], a successful parse, or
/// [`Coordinate::default`] (the origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordinateFields"))]
pub struct Coordinate {
    right_ascension: f64,
    declination: f64,
}

impl Coordinate {
    pub fn new(right_ascension: f64, declination: f64) -> Result<Self, CoordinateError> {
        if is_valid_right_ascension(right_ascension) && is_valid_declination(declination) {
            // `+ 0.0` turns a `-0.0` into `0.0`.
            Ok(Self {
                right_ascension: right_ascension + 0.0,
                declination: declination + 0.0,
            })
        } else {
            Err(CoordinateError::OutOfRange {
                ra: right_ascension,
                dec: declination,
            })
        }
    }

    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Right ascension in hours, `[0, 24)`.
    pub fn right_ascension_hours(&self) -> f64 {
        self.right_ascension * 24.0 / 360.0
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CoordinateFields {
    right_ascension: f64,
    declination: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateFields> for Coordinate {
    type Error = CoordinateError;

    fn try_from(fields: CoordinateFields) -> Result<Self, Self::Error> {
        Coordinate::new(fields.right_ascension, fields.declination)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::formatters::try_format_coordinate(self).colon)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::coordinate_parser::try_parse_coordinate(s)
    }
}

/// Result of one parse call. Check `accepted` before trusting `coordinate`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOutcome {
    pub coordinate: Coordinate,
    pub accepted: bool,
    pub error_message: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    error: Option<CoordinateError>,
}

impl ParseOutcome {
    pub fn error(&self) -> Option<&CoordinateError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<Coordinate, CoordinateError> {
        match self.error {
            Some(err) => Err(err),
            None if self.accepted => Ok(self.coordinate),
            None => Err(CoordinateError::NoHandler(self.error_message)),
        }
    }
}

impl From<Result<Coordinate, CoordinateError>> for ParseOutcome {
    fn from(result: Result<Coordinate, CoordinateError>) -> Self {
        match result {
            Ok(coordinate) => Self {
                coordinate,
                accepted: true,
                error_message: String::new(),
                error: None,
            },
            Err(err) => Self {
                coordinate: Coordinate::default(),
                accepted: false,
                error_message: err.to_string(),
                error: Some(err),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FormatStyle {
    /// `05:37:09.885 -80:28:08.831`
    Colon,
    /// `05h37m09.885s -80d28m08.831s`
    Hms,
    /// `05 37 09.885 -80 28 08.831`
    Space,
    /// `84d17m28.275s -80d28m08.831s`
    Dms,
    /// `5.61941250h -80.46911972d`
    RawDecimal,
}

impl FormatStyle {
    pub const ALL: [FormatStyle; 5] = [
        FormatStyle::Colon,
        FormatStyle::Hms,
        FormatStyle::Space,
        FormatStyle::Dms,
        FormatStyle::RawDecimal,
    ];
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatStyle::Colon => "colon",
            FormatStyle::Hms => "hms",
            FormatStyle::Space => "space",
            FormatStyle::Dms => "dms",
            FormatStyle::RawDecimal => "raw-decimal",
        };
        write!(f, "{}", name)
    }
}

/// The five renderings of a valid coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateFormats {
    pub colon: String,
    pub hms: String,
    pub space: String,
    pub dms: String,
    pub raw_decimal: String,
}

impl CoordinateFormats {
    pub fn get(&self, style: FormatStyle) -> &str {
        match style {
            FormatStyle::Colon => &self.colon,
            FormatStyle::Hms => &self.hms,
            FormatStyle::Space => &self.space,
            FormatStyle::Dms => &self.dms,
            FormatStyle::RawDecimal => &self.raw_decimal,
        }
    }
}

/// Result of one format call. All forms are empty unless `valid_inputs` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOutcome {
    pub valid_inputs: bool,
    pub colon_form: String,
    pub hms_form: String,
    pub space_form: String,
    pub dms_form: String,
    pub raw_decimal_form: String,
    pub error_message: String,
}

impl FormatOutcome {
    pub fn invalid(errors: &[CoordinateError]) -> Self {
        let error_message = errors
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            error_message,
            ..Self::default()
        }
    }

    pub fn form(&self, style: FormatStyle) -> &str {
        match style {
            FormatStyle::Colon => &self.colon_form,
            FormatStyle::Hms => &self.hms_form,
            FormatStyle::Space => &self.space_form,
            FormatStyle::Dms => &self.dms_form,
            FormatStyle::RawDecimal => &self.raw_decimal_form,
        }
    }
}

impl From<CoordinateFormats> for FormatOutcome {
    fn from(formats: CoordinateFormats) -> Self {
        Self {
            valid_inputs: true,
            colon_form: formats.colon,
            hms_form: formats.hms,
            space_form: formats.space,
            dms_form: formats.dms,
            raw_decimal_form: formats.raw_decimal,
            error_message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(0.0, -90.0).is_ok());
        assert!(Coordinate::new(359.999, 90.0).is_ok());
        assert!(Coordinate::new(360.0, 0.0).is_err());
        assert!(Coordinate::new(-0.1, 0.0).is_err());
        assert!(Coordinate::new(10.0, 90.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_drops_negative_zero() {
        let coord = Coordinate::new(-0.0, -0.0).unwrap();
        assert!(coord.right_ascension().is_sign_positive());
        assert!(coord.declination().is_sign_positive());
    }

    #[test]
    fn test_coordinate_hours() {
        let coord = Coordinate::new(90.0, 0.0).unwrap();
        assert_eq!(coord.right_ascension_hours(), 6.0);
    }

    #[test]
    fn test_parse_outcome_from_error() {
        let outcome = ParseOutcome::from(Err(CoordinateError::NoHandler("abc".to_string())));
        assert!(!outcome.accepted);
        assert_eq!(outcome.coordinate, Coordinate::default());
        assert_eq!(outcome.error_message, "Could not find handler for input abc");
        assert_eq!(
            outcome.into_result(),
            Err(CoordinateError::NoHandler("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_outcome_from_success() {
        let coord = Coordinate::new(25.0, 36.0).unwrap();
        let outcome = ParseOutcome::from(Ok(coord));
        assert!(outcome.accepted);
        assert!(outcome.error_message.is_empty());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_result(), Ok(coord));
    }

    #[test]
    fn test_invalid_format_outcome_joins_errors() {
        let outcome = FormatOutcome::invalid(&[
            CoordinateError::InvalidRightAscension(400.0),
            CoordinateError::InvalidDeclination(-95.0),
        ]);
        assert!(!outcome.valid_inputs);
        assert!(outcome.colon_form.is_empty());
        assert_eq!(outcome.error_message.lines().count(), 2);
        assert!(outcome.error_message.contains("RA must be within range"));
        assert!(outcome.error_message.contains("Declination must be within range"));
    }

    #[test]
    fn test_style_names() {
        let names: Vec<String> = FormatStyle::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["colon", "hms", "space", "dms", "raw-decimal"]);
    }
}
