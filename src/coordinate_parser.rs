//! Free-form RA/Dec text to decimal degrees.
//!
//! The input is classified by its shape (token count plus counts of `.`, `:`, the
//! unit letters and the signs) and run through an ordered list of rules. A rule either
//! finishes with a coordinate or an error, or rewrites the tokens into a form a later
//! rule understands. Most notations end up as two colon-delimited tokens.
//!
//! ```text
//! 25.0 36.0                          decimal degrees
//! 25.0d 36.0d   25.0d-36.0d          lettered decimal degrees
//! 05:37:09.885 -80:28:08.831         colon
//! 05h37m09.885s -80d28m08.831s       hms / dms
//! 84d17m28.275s -80d28m08.831s       dms RA
//! 05h 37m -80d 28m                   four tokens
//! 05h 37m 09.8851s −80° 28′ 08.8313″ six tokens
//! ```

use crate::normalize::{
    character_histogram, collapse_spaces, normalize_all_minus_signs, replace_first_occurrence,
};
use crate::numeric::{truncate_decimal, zero_pad};
use crate::sexagesimal::SexagesimalTriple;
use crate::types::{Coordinate, CoordinateError, ParseOutcome};
use crate::validation::{
    is_valid_declination, is_valid_right_ascension, validate_declination_components,
    validate_right_ascension_components,
};
use log::{debug, trace};

const HOURS_TO_DEGREES: f64 = 360.0 / 24.0;
const DEGREES_TO_HOURS: f64 = 24.0 / 360.0;
const SECONDS_DIGITS: u32 = 3;

/// Parses one RA/Dec string. Never panics; check `accepted` on the result.
pub fn parse_coordinate_string(text: &str) -> ParseOutcome {
    ParseOutcome::from(try_parse_coordinate(text))
}

pub fn try_parse_coordinate(text: &str) -> Result<Coordinate, CoordinateError> {
    let mut cascade = Cascade::new(text);
    trace!("coordinate input {:?} has shape {:?}", cascade.input, cascade.shape);

    for rule in RULES {
        if !(rule.applies)(&cascade) {
            continue;
        }
        debug!("coordinate input {:?} matched rule '{}'", cascade.input, rule.name);
        if let Step::Done(result) = (rule.apply)(&mut cascade) {
            if let Err(err) = &result {
                debug!("rule '{}' rejected input: {}", rule.name, err);
            }
            return result;
        }
    }

    debug!("no rule handles coordinate input {:?}", cascade.input);
    Err(CoordinateError::NoHandler(cascade.input))
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Shape {
    tokens: usize,
    decimals: usize,
    colons: usize,
    h: usize,
    m: usize,
    s: usize,
    d: usize,
    plus: usize,
    minus: usize,
}

impl Shape {
    fn measure(tokens: &[String]) -> Self {
        let histogram = character_histogram(&tokens.concat());
        let count = |c: char| histogram.get(&c).copied().unwrap_or(0);
        Self {
            tokens: tokens.len(),
            decimals: count('.'),
            colons: count(':'),
            h: count('h'),
            m: count('m'),
            s: count('s'),
            d: count('d'),
            plus: count('+'),
            minus: count('-'),
        }
    }

    fn has_hms_letters(&self) -> bool {
        self.h > 0 || self.m > 0 || self.s > 0
    }

    fn is_two_token_decimal(&self) -> bool {
        self.tokens == 2 && self.decimals <= 2 && self.colons == 0 && !self.has_hms_letters()
    }
}

struct Cascade {
    input: String,
    tokens: Vec<String>,
    shape: Shape,
}

impl Cascade {
    fn new(text: &str) -> Self {
        let input = collapse_spaces(&normalize_all_minus_signs(text))
            .trim()
            .to_string();
        let tokens: Vec<String> = input.split(' ').map(str::to_string).collect();
        let shape = Shape::measure(&tokens);
        Self {
            input,
            tokens,
            shape,
        }
    }

    fn malformed(&self, field: &'static str, text: &str) -> CoordinateError {
        CoordinateError::MalformedNumber {
            field,
            text: text.to_string(),
            input: self.input.clone(),
        }
    }

    fn number(&self, field: &'static str, text: &str) -> Result<f64, CoordinateError> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| self.malformed(field, text))
    }

    fn sign_split_index(&self) -> Option<usize> {
        let sign = if self.shape.plus == 1 { '+' } else { '-' };
        self.input.find(sign).filter(|&idx| idx > 0)
    }
}

enum Step {
    Continue,
    Done(Result<Coordinate, CoordinateError>),
}

struct Rule {
    name: &'static str,
    applies: fn(&Cascade) -> bool,
    apply: fn(&mut Cascade) -> Step,
}

const RULES: &[Rule] = &[
    Rule {
        name: "single token split at sign",
        applies: |c| {
            c.shape.tokens == 1
                && (c.shape.plus == 1 || c.shape.minus == 1)
                && c.sign_split_index().is_some()
        },
        apply: split_at_sign,
    },
    Rule {
        name: "degree-lettered decimal",
        applies: |c| c.shape.is_two_token_decimal() && c.shape.d == 2,
        apply: strip_degree_letters,
    },
    Rule {
        name: "decimal degrees",
        applies: |c| c.shape.is_two_token_decimal() && c.shape.d == 0,
        apply: resolve_decimal_degrees,
    },
    Rule {
        name: "dms right ascension",
        applies: |c| {
            c.shape.tokens == 2 && c.shape.colons == 0 && c.tokens[0].matches('d').count() == 1
        },
        apply: convert_dms_right_ascension,
    },
    Rule {
        name: "hms/dms letters",
        applies: |c| {
            c.shape.tokens == 2
                && c.shape.colons == 0
                && c.shape.has_hms_letters()
                && c.shape.d == 1
        },
        apply: letters_to_colons,
    },
    Rule {
        name: "four tokens",
        applies: |c| c.shape.tokens == 4 && c.shape.colons == 0 && c.shape.decimals == 0,
        apply: join_four_tokens,
    },
    Rule {
        name: "six tokens",
        applies: |c| c.shape.tokens == 6 && c.shape.colons == 0 && c.shape.decimals <= 2,
        apply: join_six_tokens,
    },
    Rule {
        name: "colon",
        applies: |c| c.shape.tokens == 2 && c.shape.colons >= 1,
        apply: resolve_colon_tokens,
    },
];

fn split_at_sign(c: &mut Cascade) -> Step {
    if let Some(idx) = c.sign_split_index() {
        let (ra, dec) = c.input.split_at(idx);
        c.tokens = vec![ra.to_string(), dec.to_string()];
        c.shape.tokens = 2;
    }
    Step::Continue
}

fn strip_degree_letters(c: &mut Cascade) -> Step {
    for token in c.tokens.iter_mut() {
        if let Some(idx) = token.find('d') {
            token.truncate(idx);
        }
    }
    c.shape.d = 0;
    Step::Continue
}

fn resolve_decimal_degrees(c: &mut Cascade) -> Step {
    Step::Done(decimal_coordinate(c))
}

fn decimal_coordinate(c: &Cascade) -> Result<Coordinate, CoordinateError> {
    let ra = c.number("right ascension", &c.tokens[0])?;
    let dec = c.number("declination", &c.tokens[1])?;
    Coordinate::new(ra, dec)
}

/// Rewrites a `84d17m28.275s` style right ascension as `HH:MM:SS.sss` so the letter rule and
/// the colon rule can finish the job.
fn convert_dms_right_ascension(c: &mut Cascade) -> Step {
    let degrees = match read_lettered_degrees(c, &c.tokens[0]) {
        Ok(degrees) => degrees,
        Err(err) => return Step::Done(Err(err)),
    };
    let hours = SexagesimalTriple::from_decimal(degrees * DEGREES_TO_HOURS)
        .truncated(SECONDS_DIGITS)
        .wrapped(24.0);
    let [h, m, s] = hours.fields(SECONDS_DIGITS as usize);
    c.tokens[0] = format!("{}:{}:{}", h, m, s);
    c.shape.d -= 1;
    c.shape.h = 1;
    Step::Continue
}

fn read_lettered_degrees(c: &Cascade, token: &str) -> Result<f64, CoordinateError> {
    let (whole, mut rest) = token
        .split_once('d')
        .ok_or_else(|| c.malformed("right ascension", token))?;
    let mut degrees = c.number("right ascension degrees", whole)?;
    if rest.matches('m').count() == 1 {
        let (minutes, after) = rest.split_once('m').unwrap_or((rest, ""));
        degrees += c.number("right ascension minutes", minutes)? / 60.0;
        rest = after;
        if rest.matches('s').count() == 1 {
            let (seconds, after) = rest.split_once('s').unwrap_or((rest, ""));
            degrees += c.number("right ascension seconds", seconds)? / 3600.0;
            rest = after;
        }
    }
    if !rest.is_empty() {
        return Err(c.malformed("right ascension", token));
    }
    Ok(degrees)
}

fn letters_to_colons(c: &mut Cascade) -> Step {
    let mut ra = c.tokens[0].clone();
    for (letter, replacement) in [('h', ":"), ('m', ":"), ('s', "")] {
        ra = replace_first_occurrence(&ra, letter, replacement);
    }
    let mut dec = c.tokens[1].clone();
    for (letter, replacement) in [('d', ":"), ('m', ":"), ('s', "")] {
        dec = replace_first_occurrence(&dec, letter, replacement);
    }
    c.tokens = vec![ra, dec];
    c.shape.colons = 1;
    Step::Continue
}

fn numeric_chars(token: &str) -> String {
    token
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

/// Zero-padded integer field, keeping a `-` even when the value is zero.
fn integer_field(c: &Cascade, field: &'static str, token: &str) -> Result<String, CoordinateError> {
    let digits = numeric_chars(token);
    digits
        .parse::<i64>()
        .map_err(|_| c.malformed(field, token))?;
    Ok(zero_pad(digits, 2))
}

fn seconds_field(c: &Cascade, field: &'static str, token: &str) -> Result<String, CoordinateError> {
    let digits = numeric_chars(token);
    let seconds = digits
        .parse::<f64>()
        .map_err(|_| c.malformed(field, token))?;
    let seconds = truncate_decimal(seconds, SECONDS_DIGITS);
    Ok(zero_pad(format!("{:.*}", SECONDS_DIGITS as usize, seconds), 2))
}

fn join_four_tokens(c: &mut Cascade) -> Step {
    let joined = four_token_fields(c);
    finish_join(c, joined)
}

fn four_token_fields(c: &Cascade) -> Result<[String; 2], CoordinateError> {
    let ra = format!(
        "{}:{}:",
        integer_field(c, "right ascension hours", &c.tokens[0])?,
        integer_field(c, "right ascension minutes", &c.tokens[1])?
    );
    let dec = format!(
        "{}:{}:",
        integer_field(c, "declination degrees", &c.tokens[2])?,
        integer_field(c, "declination minutes", &c.tokens[3])?
    );
    Ok([ra, dec])
}

fn join_six_tokens(c: &mut Cascade) -> Step {
    let joined = six_token_fields(c);
    finish_join(c, joined)
}

fn six_token_fields(c: &Cascade) -> Result<[String; 2], CoordinateError> {
    let ra = format!(
        "{}:{}:{}",
        integer_field(c, "right ascension hours", &c.tokens[0])?,
        integer_field(c, "right ascension minutes", &c.tokens[1])?,
        seconds_field(c, "right ascension seconds", &c.tokens[2])?
    );
    let dec = format!(
        "{}:{}:{}",
        integer_field(c, "declination degrees", &c.tokens[3])?,
        integer_field(c, "declination minutes", &c.tokens[4])?,
        seconds_field(c, "declination seconds", &c.tokens[5])?
    );
    Ok([ra, dec])
}

fn finish_join(c: &mut Cascade, joined: Result<[String; 2], CoordinateError>) -> Step {
    match joined {
        Ok(tokens) => {
            c.tokens = tokens.to_vec();
            c.shape.tokens = 2;
            c.shape.colons = 1;
            Step::Continue
        }
        Err(err) => Step::Done(Err(err)),
    }
}

fn resolve_colon_tokens(c: &mut Cascade) -> Step {
    Step::Done(colon_coordinate(c))
}

fn colon_coordinate(c: &Cascade) -> Result<Coordinate, CoordinateError> {
    let ra_fields: Vec<&str> = c.tokens[0].split(':').collect();
    let dec_fields: Vec<&str> = c.tokens[1].split(':').collect();
    if ra_fields.len() > 3 || dec_fields.len() > 3 {
        return Err(CoordinateError::TooManyColons(c.input.clone()));
    }

    let field = |fields: &[&str], idx: usize, name: &'static str| -> Result<f64, CoordinateError> {
        match fields.get(idx) {
            Some(text) if !text.is_empty() => c.number(name, text),
            _ => Ok(0.0),
        }
    };

    let hour = field(&ra_fields, 0, "right ascension hours")?;
    let ra_minutes = field(&ra_fields, 1, "right ascension minutes")?;
    let ra_seconds = truncate_decimal(field(&ra_fields, 2, "right ascension seconds")?, SECONDS_DIGITS);
    let degrees = field(&dec_fields, 0, "declination degrees")?;
    let dec_minutes = field(&dec_fields, 1, "declination minutes")?;
    let dec_seconds = truncate_decimal(field(&dec_fields, 2, "declination seconds")?, SECONDS_DIGITS);

    validate_right_ascension_components(hour, ra_minutes, ra_seconds)?;
    validate_declination_components(degrees, dec_minutes, dec_seconds)?;

    let ra = hour * HOURS_TO_DEGREES
        + ra_minutes * HOURS_TO_DEGREES / 60.0
        + ra_seconds * HOURS_TO_DEGREES / 3600.0;
    let dec = SexagesimalTriple {
        negative: dec_fields[0].trim_start().starts_with('-'),
        whole: degrees.abs(),
        minutes: dec_minutes,
        seconds: dec_seconds,
    }
    .to_decimal();

    if !is_valid_right_ascension(ra) || !is_valid_declination(dec) {
        return Err(CoordinateError::Inconsistent {
            input: c.input.clone(),
            ra,
            dec,
        });
    }
    Coordinate::new(ra, dec)
}
