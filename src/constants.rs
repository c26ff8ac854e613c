//! Application constants for zoo intake
//!
//! Default file locations, report ordering, and the fixed text markers
//! recognized in the arrivals and names files.

// =============================================================================
// File Locations
// =============================================================================

/// Default arrivals file, one animal description per line
pub const DEFAULT_INPUT_FILE: &str = "arrivingAnimals.txt";

/// Default names file with `<Species> Names:` sections
pub const DEFAULT_NAMES_FILE: &str = "animalNames.txt";

/// Default report destination
pub const DEFAULT_OUTPUT_FILE: &str = "zooPopulation.txt";

// =============================================================================
// Report Layout
// =============================================================================

/// Habitats written first, in this order, when present
pub const HABITAT_ORDER: &[&str] = &["hyena", "lion", "bear", "tiger"];

/// Suffix appended to the capitalized species in each habitat header
pub const HABITAT_HEADER_SUFFIX: &str = " Habitat:";

/// Name given to an animal once its species' pool is empty
pub const PLACEHOLDER_NAME: &str = "Unnamed";

/// Minimum zero-padded width of the per-species counter in an ID
pub const ID_COUNTER_WIDTH: usize = 2;

/// Number of leading species characters used as the ID prefix
pub const ID_PREFIX_LEN: usize = 2;

// =============================================================================
// Input Markers
// =============================================================================

/// Trailing token that introduces a species section in the names file
pub const NAMES_SECTION_MARKER: &str = "Names:";

/// Phrase in the second segment that precedes the season of birth
pub const BORN_IN_MARKER: &str = "born in";

/// Season recorded when the second segment has no `born in` phrase
pub const UNKNOWN_SEASON: &str = "unknown";

/// Separator used to rejoin origin segments that contained commas
pub const ORIGIN_JOINER: &str = ", ";

/// Comma segments a line needs: description, birth, color, weight
pub const MIN_RECORD_SEGMENTS: usize = 4;

/// Whitespace tokens the description needs: `<age> year old <sex> ... <species>`
pub const MIN_DESCRIPTION_TOKENS: usize = 4;

/// Position of the sex token in the description
pub const SEX_TOKEN_INDEX: usize = 3;

// =============================================================================
// Birth Date Anchors
// =============================================================================

/// Month and day assigned to each season of birth
pub mod season_anchors {
    pub const SPRING: (u32, u32) = (3, 21);
    pub const SUMMER: (u32, u32) = (6, 21);
    pub const FALL: (u32, u32) = (9, 21);
    pub const WINTER: (u32, u32) = (12, 21);

    /// Used for `unknown`, empty, or unrecognized seasons
    pub const FALLBACK: (u32, u32) = (1, 1);
}
