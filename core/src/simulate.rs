use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Sample;

// Basekoordinat for den simulerte ruten (Ambato, Ecuador).
pub const BASE_LAT: f64 = -1.2683;
pub const BASE_LON: f64 = -78.6186;

// Standardavvik for gaussiske steg i random walk (grader per sample).
const LAT_STEP_STD: f64 = 0.00005;
const LON_STEP_STD: f64 = 0.00008;

// Momentant tempo trekkes uniformt fra [5.0, 7.5] min/km.
const PACE_MIN_S_PER_KM: f64 = 300.0;
const PACE_MAX_S_PER_KM: f64 = 450.0;

/// Tempoet som tvinges inn i autopause-vinduet (over terskelen på 900).
pub const PAUSED_PACE_S_PER_KM: f64 = 1000.0;

// Puls og kadens: normalfordelt, klippet til realistisk område.
const HR_MEAN_BPM: f64 = 135.0;
const HR_STD_BPM: f64 = 10.0;
const HR_MIN_BPM: f64 = 100.0;
const HR_MAX_BPM: f64 = 160.0;
const CADENCE_MEAN_SPM: f64 = 155.0;
const CADENCE_STD_SPM: f64 = 10.0;
const CADENCE_MIN_SPM: f64 = 130.0;
const CADENCE_MAX_SPM: f64 = 175.0;

/// Parametre for én simulert aktivitet. Samme parametre (inkl. seed)
/// skal gi bit-identisk serie ved hvert kall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub point_count: usize,
    pub total_duration_sec: f64,
    pub total_distance_km: f64,
    pub seed: u64,
}

impl SimParams {
    fn validate(&self) -> Result<(), SimulateError> {
        if self.point_count < 2 {
            return Err(SimulateError::TooFewPoints(self.point_count));
        }
        if !(self.total_duration_sec > 0.0) {
            return Err(SimulateError::NonPositiveDuration(self.total_duration_sec));
        }
        if !(self.total_distance_km > 0.0) {
            return Err(SimulateError::NonPositiveDistance(self.total_distance_km));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SimulateError {
    #[error("point_count must be at least 2, got {0}")]
    TooFewPoints(usize),
    #[error("total_duration_sec must be positive, got {0}")]
    NonPositiveDuration(f64),
    #[error("total_distance_km must be positive, got {0}")]
    NonPositiveDistance(f64),
}

/// Autopause-vinduet: sammenhengende indekser fra 50 % til 60 % av serien,
/// begge ender inklusive.
pub fn pause_window(point_count: usize) -> (usize, usize) {
    let start = (point_count as f64 * 0.5) as usize;
    let end = (point_count as f64 * 0.6) as usize;
    (start, end.min(point_count.saturating_sub(1)))
}

/// Genererer en syntetisk aktivitetsserie: jevnt fordelte tidsstempler,
/// random walk rundt basekoordinatet, uniformt tempo, puls og kadens.
/// Ett sammenhengende autopause-vindu tvinges inn midt i serien.
pub fn simulate_activity(params: &SimParams) -> Result<Vec<Sample>, SimulateError> {
    params.validate()?;

    let n = params.point_count;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    // Std > 0, så unwrap her kan ikke feile for konstantene over.
    let lat_step = Normal::new(0.0, LAT_STEP_STD).expect("gyldig std");
    let lon_step = Normal::new(0.0, LON_STEP_STD).expect("gyldig std");
    let hr_dist = Normal::new(HR_MEAN_BPM, HR_STD_BPM).expect("gyldig std");
    let cadence_dist = Normal::new(CADENCE_MEAN_SPM, CADENCE_STD_SPM).expect("gyldig std");

    let (pause_start, pause_end) = pause_window(n);

    let mut lat = BASE_LAT;
    let mut lon = BASE_LON;
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        // linspace(0, total_duration, n) – siste sample treffer eksakt slutt.
        let t_sec = params.total_duration_sec * i as f64 / (n - 1) as f64;

        lat += lat_step.sample(&mut rng);
        lon += lon_step.sample(&mut rng);

        let pace_s_per_km = if i >= pause_start && i <= pause_end {
            PAUSED_PACE_S_PER_KM
        } else {
            rng.gen_range(PACE_MIN_S_PER_KM..PACE_MAX_S_PER_KM)
        };

        let hr_bpm = hr_dist.sample(&mut rng).clamp(HR_MIN_BPM, HR_MAX_BPM);
        let cadence_spm = cadence_dist
            .sample(&mut rng)
            .clamp(CADENCE_MIN_SPM, CADENCE_MAX_SPM);

        out.push(Sample {
            t_sec,
            lat,
            lon,
            pace_s_per_km,
            hr_bpm,
            cadence_spm,
        });
    }

    Ok(out)
}

/// Vekt for varmekartet: intensitet omvendt proporsjonal med tempoet,
/// klippet til [0.5, 3.0]. Pausede samples regnes som 9.0 min/km.
pub fn heat_weight(sample: &Sample) -> f64 {
    let pace_min_per_km = if sample.is_paused() {
        9.0
    } else {
        sample.pace_s_per_km / 60.0
    };
    (10.0 / pace_min_per_km).clamp(0.5, 3.0)
}
