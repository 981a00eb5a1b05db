//! Tests for meet construction from CSV text

use super::{sample_meta, sample_results_csv};
use crate::app::models::{MarkKind, MeetMeta};
use crate::app::services::csv_import::build_meet;

#[test]
fn test_builds_performances_from_a_full_export() {
    let outcome = build_meet(&sample_results_csv(), &sample_meta(), None);

    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.total_rows, 3);

    let meet = outcome.meet.expect("meet should be built");
    assert_eq!(meet.name, "Spring Invitational");
    assert_eq!(meet.date.as_deref(), Some("2025-05-17"));
    assert_eq!(meet.season.as_deref(), Some("2025 outdoor"));
    assert_eq!(meet.performances.len(), 3);

    // Row order is preserved.
    let sprint = &meet.performances[0];
    assert_eq!(sprint.event_name, "100m");
    assert_eq!(sprint.athlete_id, "jordan-avery-central");
    assert_eq!(sprint.mark_kind, MarkKind::Distance);

    let mile = &meet.performances[1];
    assert_eq!(mile.mark_kind, MarkKind::Time);
    assert!((mile.mark_value.unwrap() - 312.4).abs() < 1e-9);

    let vault = &meet.performances[2];
    assert_eq!(vault.mark_raw, "11-6");
    assert_eq!(vault.mark_kind, MarkKind::Distance);
    assert_eq!(vault.team.as_deref(), Some("Northside"));
}

#[test]
fn test_empty_csv_yields_null_meet() {
    let outcome = build_meet("", &sample_meta(), None);

    assert!(outcome.meet.is_none());
    assert_eq!(outcome.total_rows, 0);
    assert_eq!(outcome.warnings, vec!["No rows found in the CSV."]);
    assert!(!outcome.is_usable());
}

#[test]
fn test_rows_missing_required_fields_are_warned_and_skipped() {
    let csv = "Event,Mark,First Name,Last Name\n\
               100m,12.84,Jordan,Avery\n\
               100m,,Sam,Bell\n\
               ,13.02,Casey,Reed\n\
               200m,26.44,,Quinn\n";

    let outcome = build_meet(csv, &sample_meta(), None);

    assert_eq!(outcome.total_rows, 4);
    assert_eq!(outcome.performances_imported(), 1);
    assert_eq!(outcome.warnings.len(), 3);

    // Warnings cite 1-based spreadsheet row numbers, past the header.
    assert_eq!(
        outcome.warnings[0],
        "Skipped row 3: missing event, athlete, or result."
    );
    assert_eq!(
        outcome.warnings[1],
        "Skipped row 4: missing event, athlete, or result."
    );
    assert_eq!(
        outcome.warnings[2],
        "Skipped row 5: missing event, athlete, or result."
    );
}

#[test]
fn test_combined_name_column_comma_form() {
    let csv = "Event,Result,Athlete\n1600m,5:12.40,\"Bell, Sam\"\n";
    let outcome = build_meet(csv, &sample_meta(), None);

    let meet = outcome.meet.expect("meet should be built");
    assert_eq!(meet.performances.len(), 1);
    assert_eq!(meet.performances[0].athlete_first, "Sam");
    assert_eq!(meet.performances[0].athlete_last, "Bell");
}

#[test]
fn test_combined_name_column_space_form() {
    let csv = "Event,Result,Athlete\n1600m,5:12.40,Mary Jo Kane\n";
    let outcome = build_meet(csv, &sample_meta(), None);

    let meet = outcome.meet.expect("meet should be built");
    assert_eq!(meet.performances[0].athlete_first, "Mary Jo");
    assert_eq!(meet.performances[0].athlete_last, "Kane");
}

#[test]
fn test_single_token_name_cannot_fill_both_fields() {
    let csv = "Event,Result,Athlete\n1600m,5:12.40,Cher\n";
    let outcome = build_meet(csv, &sample_meta(), None);

    assert_eq!(outcome.performances_imported(), 0);
    // The skipped-row warning plus the no-usable-performances warning.
    assert_eq!(outcome.warnings.len(), 2);
}

#[test]
fn test_direct_name_columns_win_over_combined() {
    let csv = "Event,Result,First,Last,Athlete\n100m,12.84,Jordan,Avery,\"Wrong, Name\"\n";
    let outcome = build_meet(csv, &sample_meta(), None);

    let meet = outcome.meet.expect("meet should be built");
    assert_eq!(meet.performances[0].athlete_first, "Jordan");
    assert_eq!(meet.performances[0].athlete_last, "Avery");
}

#[test]
fn test_all_rows_unusable_appends_final_warning() {
    let csv = "Event,Mark,First Name,Last Name\n100m,,Sam,Bell\n";
    let outcome = build_meet(csv, &sample_meta(), None);

    let meet = outcome.meet.expect("meet record is still produced");
    assert!(meet.performances.is_empty());
    assert!(!outcome.is_usable());
    assert_eq!(
        outcome.warnings.last().map(String::as_str),
        Some("No usable performances were found in the CSV.")
    );
}

#[test]
fn test_rebuild_is_identical_except_id_and_timestamp() {
    let first = build_meet(&sample_results_csv(), &sample_meta(), None);
    let second = build_meet(&sample_results_csv(), &sample_meta(), None);

    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.total_rows, second.total_rows);

    let first_meet = first.meet.expect("meet should be built");
    let second_meet = second.meet.expect("meet should be built");
    assert_eq!(first_meet.performances, second_meet.performances);
    assert_eq!(first_meet.name, second_meet.name);
}

#[test]
fn test_meet_id_carries_name_slug_and_date_digits() {
    let outcome = build_meet(&sample_results_csv(), &sample_meta(), None);
    let meet = outcome.meet.expect("meet should be built");

    assert!(
        meet.id.starts_with("spring-invitational-20250517-"),
        "unexpected id {}",
        meet.id
    );
}

#[test]
fn test_defaults_apply_when_metadata_is_absent() {
    let outcome = build_meet(&sample_results_csv(), &MeetMeta::default(), None);
    let meet = outcome.meet.expect("meet should be built");

    assert_eq!(meet.name, "Imported Meet");
    assert!(
        meet.id.starts_with("imported-meet-undated-"),
        "unexpected id {}",
        meet.id
    );
    assert!(meet.date.is_none());
}

#[test]
fn test_success_rate_accounts_for_skipped_rows() {
    let csv = "Event,Mark,First Name,Last Name\n\
               100m,12.84,Jordan,Avery\n\
               100m,,Sam,Bell\n";
    let outcome = build_meet(csv, &sample_meta(), None);
    assert!((outcome.success_rate() - 50.0).abs() < 1e-9);
}
