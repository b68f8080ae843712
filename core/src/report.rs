use serde::Serialize;

use crate::types::{ActivitySummary, RecordFlag};

/// Sentinel for udefinert tempo (distanse 0).
pub const PACE_UNDEFINED: &str = "--:--";

/// Tempo som "M:SS" per km, f.eks. 330 -> "5:30". 0 gir sentinel.
pub fn format_pace_min_km(pace_s_per_km: f64) -> String {
    if !(pace_s_per_km > 0.0) {
        return PACE_UNDEFINED.to_string();
    }
    let total = pace_s_per_km.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Varighet som "H:MM:SS", f.eks. 2560 -> "0:42:40".
pub fn format_duration_hms(duration_sec: u32) -> String {
    let h = duration_sec / 3600;
    let m = (duration_sec % 3600) / 60;
    let s = duration_sec % 60;
    format!("{h}:{m:02}:{s:02}")
}

/// Ferdigformaterte topplinjetall slik dashbordet rendrer dem,
/// pluss rekordtekster. Serialiseres til JSON for presentasjonslaget.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub distance_km: String,       // "5.00"
    pub avg_pace_min_km: String,   // "5:30" eller "--:--"
    pub duration: String,          // "0:42:40"
    pub calories_kcal: u32,
    pub avg_hr_bpm: u32,
    pub avg_cadence_spm: u32,
    pub moving_time: String,       // "0:38:24"
    pub pause_time: String,        // "0:04:16"
    pub records: Vec<String>,
}

impl SessionReport {
    pub fn from_summary(summary: &ActivitySummary, records: &[RecordFlag]) -> Self {
        let pause_sec = summary.duration_sec.saturating_sub(summary.moving_time_sec);
        Self {
            distance_km: format!("{:.2}", summary.distance_km),
            avg_pace_min_km: format_pace_min_km(summary.avg_pace_s_per_km),
            duration: format_duration_hms(summary.duration_sec),
            calories_kcal: summary.calories_kcal,
            avg_hr_bpm: summary.avg_hr_bpm.round() as u32,
            avg_cadence_spm: summary.avg_cadence_spm.round() as u32,
            moving_time: format_duration_hms(summary.moving_time_sec),
            pause_time: format_duration_hms(pause_sec),
            records: records.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
