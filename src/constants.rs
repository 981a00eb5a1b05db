//! Application constants for the meet importer
//!
//! This module contains the store schema constant, header synonym tables,
//! and default values used throughout the importer.

// =============================================================================
// Persisted Store
// =============================================================================

/// Schema version written to the persisted store blob
///
/// A persisted blob with any other version is treated as absent and
/// replaced on the next save. There is no migration path.
pub const STORE_SCHEMA_VERSION: u32 = 1;

/// File name of the persisted store blob
pub const STORE_FILE_NAME: &str = "imports.json";

/// Application directory under the per-user data directory
pub const APP_DIR_NAME: &str = "meet-importer";

// =============================================================================
// Header Synonyms
// =============================================================================

/// Recognized header spellings per semantic CSV column
///
/// Headers are normalized (lowercased, stripped to `[a-z0-9]`) before
/// matching, so "First Name", "firstname", and "FIRST_NAME" are equal.
/// Within a field the first matching header in column order wins.
pub mod header_synonyms {
    /// Event name column
    pub const EVENT: &[&str] = &["event", "eventname", "eventtitle"];

    /// Result/mark column
    pub const RESULT: &[&str] = &[
        "result",
        "mark",
        "time",
        "performance",
        "finalmark",
        "distance",
    ];

    /// Athlete first name column
    pub const FIRST: &[&str] = &[
        "firstname",
        "first",
        "givenname",
        "athletefirstname",
        "firstname1",
    ];

    /// Athlete last name column
    pub const LAST: &[&str] = &[
        "lastname",
        "last",
        "surname",
        "familyname",
        "athletelastname",
        "lastname1",
    ];

    /// Combined athlete name column, used when first/last are absent
    pub const NAME: &[&str] = &["athlete", "name", "competitor", "runner"];

    /// Gender column
    pub const GENDER: &[&str] = &["gender", "sex"];

    /// Grade/year column
    pub const GRADE: &[&str] = &["grade", "gradeyear", "year", "grade1"];

    /// Team/school column
    pub const TEAM: &[&str] = &["team", "school", "club", "teamname"];
}

// =============================================================================
// Marks and Display
// =============================================================================

/// Meters per inch, for converting imperial field-event marks
pub const METERS_PER_INCH: f64 = 0.0254;

/// Placeholder rendered when a mark has neither raw text nor a value
pub const MISSING_MARK_PLACEHOLDER: &str = "\u{2014}";

/// Default number of entries kept per event leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

/// Fallback slug for meets imported without a name
pub const DEFAULT_MEET_SLUG: &str = "imported-meet";

/// Fallback display name for meets imported without a name
pub const DEFAULT_MEET_NAME: &str = "Imported Meet";
