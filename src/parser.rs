//! Arrival record parsing.
//!
//! Each arrival line is comma separated:
//!
//! ```text
//! 4 year old female hyena, born in spring, tan color, 70 pounds, from Friguia Park, Tunisia
//! ```
//!
//! Segment 0 is `<age> year old <sex> <species>`, segment 1 carries the
//! season after `born in`, segments 2 and 3 are color and weight, and
//! everything after that is the origin, which may itself contain commas.

use crate::constants::{
    BORN_IN_MARKER, MIN_DESCRIPTION_TOKENS, MIN_RECORD_SEGMENTS, ORIGIN_JOINER, SEX_TOKEN_INDEX,
    UNKNOWN_SEASON,
};
use crate::error::{Result, ZooError};
use crate::models::AnimalRecord;

/// Parse one non-blank arrival line
///
/// `line_number` is 1-based and only used in error messages.
pub fn parse_record(line: &str, line_number: usize) -> Result<AnimalRecord> {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() < MIN_RECORD_SEGMENTS {
        return Err(ZooError::malformed(
            line_number,
            format!(
                "expected at least {} comma-separated segments, found {}",
                MIN_RECORD_SEGMENTS,
                parts.len()
            ),
        ));
    }

    let tokens: Vec<&str> = parts[0].split_whitespace().collect();
    if tokens.len() < MIN_DESCRIPTION_TOKENS {
        return Err(ZooError::malformed(
            line_number,
            format!(
                "description '{}' should read '<age> year old <sex> <species>'",
                parts[0]
            ),
        ));
    }

    let age = tokens[0]
        .parse::<i64>()
        .map_err(|source| ZooError::InvalidAge {
            line_number,
            value: tokens[0].to_string(),
            source,
        })?;
    let sex = tokens[SEX_TOKEN_INDEX].to_string();
    let species = tokens[tokens.len() - 1].to_string();

    Ok(AnimalRecord {
        age,
        sex,
        species,
        season: parse_season(parts[1]),
        color: parts[2].to_string(),
        weight: parts[3].to_string(),
        origin: parts[4..].join(ORIGIN_JOINER),
    })
}

/// Extract the season from a `born in <season>` segment
fn parse_season(segment: &str) -> String {
    if segment.contains(BORN_IN_MARKER) {
        segment.replace(BORN_IN_MARKER, "").trim().to_string()
    } else {
        UNKNOWN_SEASON.to_string()
    }
}
