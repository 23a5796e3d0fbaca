//! Right ascension / declination text parsing and formatting.
//!
//! ```
//! use radec::{format_coordinate, parse_coordinate_string};
//!
//! let parsed = parse_coordinate_string("05h 37m 09.885s -80d 28m 08.831s");
//! assert!(parsed.accepted);
//!
//! let coord = parsed.coordinate;
//! let formats = format_coordinate(coord.right_ascension(), coord.declination());
//! assert_eq!(formats.colon_form, "05:37:09.885 -80:28:08.831");
//! ```

pub mod coordinate_parser;
pub mod formatters;
pub mod normalize;
pub mod numeric;
pub mod sexagesimal;
pub mod types;
pub mod validation;

pub use coordinate_parser::{parse_coordinate_string, try_parse_coordinate};
pub use formatters::{format_coordinate, try_format_coordinate};
pub use types::{
    Coordinate, CoordinateError, CoordinateFormats, FormatOutcome, FormatStyle, ParseOutcome,
};
