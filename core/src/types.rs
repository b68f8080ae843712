use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tempo over denne grensen regnes som autopause (sek/km).
pub const AUTO_PAUSE_THRESHOLD_S_PER_KM: f64 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t_sec: f64,         // sekunder fra start, strengt stigende
    pub lat: f64,           // grader
    pub lon: f64,           // grader
    pub pace_s_per_km: f64, // sek/km, over terskel => pause
    pub hr_bpm: f64,        // bpm
    pub cadence_spm: f64,   // steg/min
}

impl Sample {
    /// Autopause: tempoet ligger over terskelen.
    pub fn is_paused(&self) -> bool {
        self.pace_s_per_km >= AUTO_PAUSE_THRESHOLD_S_PER_KM
    }
}

/// Sammendrag av et prefiks av serien. Uforanderlig etter beregning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub finished_at: DateTime<Utc>,
    pub distance_km: f64,
    pub duration_sec: u32,
    pub moving_time_sec: u32, // alltid <= duration_sec
    /// 0.0 når distansen er 0 (kanonisk valg, se DESIGN.md).
    pub avg_pace_s_per_km: f64,
    pub calories_kcal: u32,
    pub avg_hr_bpm: f64,
    pub avg_cadence_spm: f64,
}

impl ActivitySummary {
    /// Nullverdi-sammendrag for cursor == 0.
    pub fn zero(at: DateTime<Utc>) -> Self {
        Self {
            finished_at: at,
            distance_km: 0.0,
            duration_sec: 0,
            moving_time_sec: 0,
            avg_pace_s_per_km: 0.0,
            calories_kcal: 0,
            avg_hr_bpm: 0.0,
            avg_cadence_spm: 0.0,
        }
    }
}

/// Personlig rekord – beregnes på nytt ved hver evaluering, lagres aldri.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RecordFlag {
    LongestDistance { distance_km: f64 },
    BestReferencePace { pace_s_per_km: f64 },
}

impl fmt::Display for RecordFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFlag::LongestDistance { distance_km } => {
                write!(f, "Personlig rekord – lengste distanse: {distance_km:.2} km")
            }
            RecordFlag::BestReferencePace { pace_s_per_km } => {
                write!(
                    f,
                    "Personlig rekord – beste 5 km-tempo: {}",
                    crate::report::format_pace_min_km(*pace_s_per_km)
                )
            }
        }
    }
}
