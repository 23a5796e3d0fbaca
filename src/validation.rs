use crate::types::CoordinateError;

pub fn is_valid_right_ascension(degrees: f64) -> bool {
    (0.0..360.0).contains(&degrees)
}

pub fn is_valid_declination(degrees: f64) -> bool {
    (-90.0..=90.0).contains(&degrees)
}

pub fn is_valid_hour(hours: f64) -> bool {
    (0.0..24.0).contains(&hours) && !hours.is_sign_negative()
}

/// Minutes and seconds fields: `[0, 60)`.
pub fn is_valid_sexagesimal_part(value: f64) -> bool {
    (0.0..60.0).contains(&value)
}

pub fn validate_right_ascension(degrees: f64) -> Result<f64, CoordinateError> {
    if is_valid_right_ascension(degrees) {
        Ok(degrees)
    } else {
        Err(CoordinateError::InvalidRightAscension(degrees))
    }
}

pub fn validate_declination(degrees: f64) -> Result<f64, CoordinateError> {
    if is_valid_declination(degrees) {
        Ok(degrees)
    } else {
        Err(CoordinateError::InvalidDeclination(degrees))
    }
}

/// Checks both axes independently so a caller can report every violated bound.
pub fn validate_coordinate_inputs(ra: f64, dec: f64) -> Result<(f64, f64), Vec<CoordinateError>> {
    match (validate_right_ascension(ra), validate_declination(dec)) {
        (Ok(ra), Ok(dec)) => Ok((ra, dec)),
        (ra, dec) => Err([ra.err(), dec.err()].into_iter().flatten().collect()),
    }
}

pub fn validate_right_ascension_components(
    hour: f64,
    minutes: f64,
    seconds: f64,
) -> Result<(), CoordinateError> {
    if is_valid_hour(hour) && is_valid_sexagesimal_part(minutes) && is_valid_sexagesimal_part(seconds)
    {
        Ok(())
    } else {
        Err(CoordinateError::RightAscensionComponents {
            hour,
            minutes,
            seconds,
        })
    }
}

pub fn validate_declination_components(
    degrees: f64,
    minutes: f64,
    seconds: f64,
) -> Result<(), CoordinateError> {
    if is_valid_declination(degrees)
        && is_valid_sexagesimal_part(minutes)
        && is_valid_sexagesimal_part(seconds)
    {
        Ok(())
    } else {
        Err(CoordinateError::DeclinationComponents {
            degrees,
            minutes,
            seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_ascension_is_half_open() {
        assert!(is_valid_right_ascension(0.0));
        assert!(is_valid_right_ascension(359.9999));
        assert!(!is_valid_right_ascension(360.0));
        assert!(!is_valid_right_ascension(-1e-9));
        assert!(!is_valid_right_ascension(f64::NAN));
    }

    #[test]
    fn test_declination_is_closed() {
        assert!(is_valid_declination(90.0));
        assert!(is_valid_declination(-90.0));
        assert!(!is_valid_declination(90.000001));
        assert!(!is_valid_declination(f64::INFINITY));
    }

    #[test]
    fn test_hour_rejects_negative_zero() {
        assert!(is_valid_hour(0.0));
        assert!(!is_valid_hour(-0.0));
        assert!(!is_valid_hour(24.0));
    }

    #[test]
    fn test_collects_both_violations() {
        let errors = validate_coordinate_inputs(400.0, -91.0).unwrap_err();
        assert_eq!(
            errors,
            vec![
                CoordinateError::InvalidRightAscension(400.0),
                CoordinateError::InvalidDeclination(-91.0),
            ]
        );
        assert_eq!(validate_coordinate_inputs(10.0, 20.0), Ok((10.0, 20.0)));
    }

    #[test]
    fn test_component_checks() {
        assert!(validate_right_ascension_components(23.0, 59.0, 59.999).is_ok());
        assert!(validate_right_ascension_components(24.0, 0.0, 0.0).is_err());
        assert!(validate_right_ascension_components(5.0, 60.0, 0.0).is_err());
        assert!(validate_declination_components(-90.0, 0.0, 0.0).is_ok());
        assert!(validate_declination_components(-80.0, 28.0, 60.0).is_err());
        assert!(validate_declination_components(-80.0, -1.0, 0.0).is_err());
    }
}
