// core/tests/test_records.rs

use chrono::Utc;

use stridegraph_core::records::evaluate_records;
use stridegraph_core::types::{ActivitySummary, RecordFlag};

fn summary(distance_km: f64, avg_pace_s_per_km: f64) -> ActivitySummary {
    ActivitySummary {
        finished_at: Utc::now(),
        distance_km,
        duration_sec: 1800,
        moving_time_sec: 1700,
        avg_pace_s_per_km,
        calories_kcal: (distance_km * 50.0) as u32,
        avg_hr_bpm: 135.0,
        avg_cadence_spm: 155.0,
    }
}

#[test]
fn empty_history_yields_no_flags() {
    let flags = evaluate_records(&[], &summary(10.0, 250.0));
    assert!(flags.is_empty(), "første aktivitet skal aldri flagges");
}

#[test]
fn longest_distance_flag_references_latest_distance() {
    let prior = vec![summary(4.0, 400.0), summary(5.5, 380.0)];
    let flags = evaluate_records(&prior, &summary(6.0, 0.0));

    assert_eq!(
        flags,
        vec![RecordFlag::LongestDistance { distance_km: 6.0 }]
    );
}

#[test]
fn longest_distance_requires_strict_gain_on_previous_entry() {
    // Likt med forrige innslag: >= maks, men ikke > nest siste.
    let prior = vec![summary(5.0, 400.0)];
    let flags = evaluate_records(&prior, &summary(5.0, 0.0));
    assert!(flags.is_empty());
}

#[test]
fn longest_distance_tiebreak_allows_tie_with_older_entry() {
    // Suspekt, men bevart for kompatibilitet: likhet med et ELDRE maksimum
    // flagges så lenge latest slår det nest siste innslaget.
    let prior = vec![summary(5.0, 400.0), summary(4.0, 420.0)];
    let flags = evaluate_records(&prior, &summary(5.0, 0.0));

    assert_eq!(
        flags,
        vec![RecordFlag::LongestDistance { distance_km: 5.0 }]
    );
}

#[test]
fn best_reference_pace_compares_against_windowed_candidates() {
    let prior = vec![
        summary(5.0, 320.0), // i vinduet [4.5, 5.5]
        summary(6.0, 250.0), // raskere, men utenfor vinduet: teller ikke
    ];
    let flags = evaluate_records(&prior, &summary(4.8, 300.0));

    assert!(flags.contains(&RecordFlag::BestReferencePace {
        pace_s_per_km: 300.0
    }));
}

#[test]
fn best_reference_pace_window_applies_to_candidates_not_latest() {
    // Åpent spørsmål avgjort i DESIGN.md: latest kan flagges selv om den
    // selv ligger utenfor referansevinduet.
    let prior = vec![summary(5.0, 320.0), summary(5.2, 330.0)];
    let flags = evaluate_records(&prior, &summary(10.0, 310.0));

    assert!(flags.contains(&RecordFlag::BestReferencePace {
        pace_s_per_km: 310.0
    }));
}

#[test]
fn zero_pace_never_flags_reference_pace() {
    let prior = vec![summary(5.0, 320.0)];
    let flags = evaluate_records(&prior, &summary(0.0, 0.0));
    assert!(flags.is_empty());
}

#[test]
fn slower_pace_does_not_flag() {
    let prior = vec![summary(5.0, 320.0), summary(5.0, 340.0)];
    let flags = evaluate_records(&prior, &summary(5.0, 320.0));
    assert!(
        !flags
            .iter()
            .any(|f| matches!(f, RecordFlag::BestReferencePace { .. })),
        "likt tempo skal ikke flagges (krever strengt bedre)"
    );
}
