use chrono::{DateTime, Utc};

use crate::types::{ActivitySummary, Sample};

/// Flat kaloriekonstant (kcal per km). Se DESIGN.md for valget.
pub const CALORIES_PER_KM: f64 = 50.0;

/// Input til sammendragsberegningen. `at` sendes inn eksplisitt slik at
/// funksjonen er ren: like input gir bit-identisk output.
#[derive(Debug, Clone, Copy)]
pub struct MetricsInputs<'a> {
    pub series: &'a [Sample],
    /// Indeks i [0, len]; utenfor området klemmes til len.
    pub cursor: usize,
    pub total_distance_km: f64,
    pub total_duration_sec: f64,
    /// Tidsstempel som settes på sammendraget.
    pub at: DateTime<Utc>,
}

/// Bevegelsestid (sek) for prefikset [0, cursor): summen av intervallene
/// (i-1, i) der sample i ikke er i autopause.
pub fn moving_time_sec(series: &[Sample], cursor: usize) -> f64 {
    let cursor = cursor.min(series.len());
    let mut sum = 0.0;
    for i in 1..cursor {
        if !series[i].is_paused() {
            sum += series[i].t_sec - series[i - 1].t_sec;
        }
    }
    sum
}

/// Tid i autopause (sek) for prefikset: varighet minus bevegelsestid.
pub fn pause_time_sec(series: &[Sample], cursor: usize) -> f64 {
    let cursor = cursor.min(series.len());
    if cursor == 0 {
        return 0.0;
    }
    let duration = series[cursor - 1].t_sec;
    (duration - moving_time_sec(series, cursor)).max(0.0)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut cnt = 0usize;
    for v in values {
        sum += v;
        cnt += 1;
    }
    if cnt == 0 {
        0.0
    } else {
        sum / cnt as f64
    }
}

/// Folder prefikset [0, cursor) av serien til et sammendrag.
///
/// Distansen modelleres lineært i medgått tid (ikke geodetisk fra
/// posisjonene): distance = total_distance * duration / total_duration.
/// cursor == 0 gir et veldefinert null-sammendrag, aldri feil.
pub fn compute_summary(inputs: &MetricsInputs<'_>) -> ActivitySummary {
    let series = inputs.series;
    let cursor = inputs.cursor.min(series.len());

    if cursor == 0 {
        return ActivitySummary::zero(inputs.at);
    }

    let duration_sec = series[cursor - 1].t_sec;

    let distance_km = if inputs.total_duration_sec > 0.0 {
        inputs.total_distance_km * duration_sec / inputs.total_duration_sec
    } else {
        0.0
    };

    let moving_sec = moving_time_sec(series, cursor);

    let avg_pace_s_per_km = if distance_km > 0.0 {
        moving_sec / distance_km
    } else {
        0.0
    };

    let calories_kcal = (distance_km * CALORIES_PER_KM).floor().max(0.0) as u32;

    let prefix = &series[..cursor];
    let avg_hr_bpm = mean(prefix.iter().map(|s| s.hr_bpm));
    let avg_cadence_spm = mean(prefix.iter().map(|s| s.cadence_spm));

    ActivitySummary {
        finished_at: inputs.at,
        distance_km,
        duration_sec: duration_sec.round() as u32,
        moving_time_sec: moving_sec.round() as u32,
        avg_pace_s_per_km,
        calories_kcal,
        avg_hr_bpm,
        avg_cadence_spm,
    }
}
