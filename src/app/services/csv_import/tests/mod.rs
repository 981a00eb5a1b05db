//! Shared fixtures for CSV import pipeline tests

mod builder_tests;
mod tokenizer_tests;

use crate::app::models::MeetMeta;

/// A well-formed results export exercising every supported column
pub fn sample_results_csv() -> String {
    "Event,Mark,First Name,Last Name,Gender,Grade,Team\n\
     100m,12.84,Jordan,Avery,F,11,Central\n\
     1600m,5:12.40,Sam,Bell,M,10,Central\n\
     Pole Vault,11-6,Casey,Reed,F,12,Northside\n"
        .to_string()
}

/// Metadata for a typical import
pub fn sample_meta() -> MeetMeta {
    MeetMeta {
        name: "Spring Invitational".to_string(),
        date: Some("2025-05-17".to_string()),
        season: Some("2025 outdoor".to_string()),
        location: Some("Riverside HS".to_string()),
        source: Some("hytek".to_string()),
    }
}
