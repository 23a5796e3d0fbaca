use crate::numeric::{safe_floor, snap_to_zero, truncate_decimal, zero_pad};

/// A value split into whole units, minutes and seconds.
///
/// The sign lives in `negative` rather than on `whole`, so values in `(-1, 0)` keep
/// it. `minutes` and `seconds` are magnitudes in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexagesimalTriple {
    pub negative: bool,
    pub whole: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl SexagesimalTriple {
    pub fn from_decimal(value: f64) -> Self {
        let magnitude = value.abs();
        let whole = safe_floor(magnitude) as f64;
        // `whole` may have been rounded up past `magnitude`.
        let minutes = safe_floor(((magnitude - whole) * 60.0).max(0.0)) as f64;
        let seconds = snap_to_zero((magnitude - whole - minutes / 60.0) * 3600.0).max(0.0);
        Self {
            negative: value < 0.0,
            whole,
            minutes,
            seconds,
        }
        .with_sign_cleared_at_zero()
    }

    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.whole.abs() + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Wraps the whole field into `[0, modulus)`.
    pub fn wrapped(self, modulus: f64) -> Self {
        Self {
            whole: self.whole.rem_euclid(modulus),
            ..self
        }
        .with_sign_cleared_at_zero()
    }

    /// Drops seconds digits past `digits` without rounding.
    pub fn truncated(self, digits: u32) -> Self {
        Self {
            seconds: truncate_decimal(self.seconds, digits),
            ..self
        }
    }

    /// Rounds seconds to `digits` places and carries a resulting `60` into minutes and
    /// whole units. `whole_modulus` wraps the whole field (24 for hours, 360 for RA
    /// degrees).
    pub fn rounded(self, digits: u32, whole_modulus: Option<f64>) -> Self {
        let scale = 10f64.powi(digits as i32);
        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = self.minutes;
        let mut whole = self.whole;
        if seconds >= 60.0 {
            seconds = 0.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes = 0.0;
            whole += 1.0;
        }
        let carried = Self {
            negative: self.negative,
            whole,
            minutes,
            seconds,
        };
        match whole_modulus {
            Some(modulus) => carried.wrapped(modulus),
            None => carried.with_sign_cleared_at_zero(),
        }
    }

    /// Zero-padded `[whole, minutes, seconds]` with the sign on the whole field and
    /// seconds rendered to `digits` places.
    pub fn fields(&self, digits: usize) -> [String; 3] {
        let sign = if self.negative { "-" } else { "" };
        [
            zero_pad(format!("{}{}", sign, self.whole as i64), 2),
            zero_pad(self.minutes as i64, 2),
            zero_pad(format!("{:.*}", digits, self.seconds), 2),
        ]
    }

    fn with_sign_cleared_at_zero(self) -> Self {
        let is_zero = self.whole == 0.0 && self.minutes == 0.0 && self.seconds == 0.0;
        Self {
            negative: self.negative && !is_zero,
            ..self
        }
    }
}
