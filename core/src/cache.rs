use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;

use crate::simulate::{simulate_activity, SimParams, SimulateError};
use crate::types::Sample;

type CacheKey = (usize, OrderedFloat<f64>, OrderedFloat<f64>, u64);

fn cache_key(params: &SimParams) -> CacheKey {
    (
        params.point_count,
        OrderedFloat(params.total_duration_sec),
        OrderedFloat(params.total_distance_km),
        params.seed,
    )
}

/// Memoisering av genererte serier, nøklet på parametertuppelen.
/// Gjentatte kall med samme parametre (typisk én per redraw) skal gi
/// samme serie uten å regenerere, slik at ruten ikke "hopper" i UI-et.
#[derive(Debug, Default)]
pub struct SimulationCache {
    cache: Mutex<HashMap<CacheKey, Arc<Vec<Sample>>>>,
}

impl SimulationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Henter serien fra cache, eller genererer og legger den inn.
    pub fn get_or_generate(&self, params: &SimParams) -> Result<Arc<Vec<Sample>>, SimulateError> {
        let key = cache_key(params);
        let mut cache = self.cache.lock().expect("cache-lås forgiftet");

        if let Some(series) = cache.get(&key) {
            log::debug!("simulation cache hit (seed={})", params.seed);
            return Ok(Arc::clone(series));
        }

        let series = Arc::new(simulate_activity(params)?);
        cache.insert(key, Arc::clone(&series));
        log::debug!(
            "simulation cache miss (seed={}, points={})",
            params.seed,
            params.point_count
        );
        Ok(series)
    }

    /// Fjerner én nøkkel. Ny aktivitet bruker ny seed, så dette trengs
    /// bare når samme parametre skal regenereres eksplisitt.
    pub fn invalidate(&self, params: &SimParams) {
        let mut cache = self.cache.lock().expect("cache-lås forgiftet");
        cache.remove(&cache_key(params));
    }

    /// Tømmer hele cachen.
    pub fn clear(&self) {
        let mut cache = self.cache.lock().expect("cache-lås forgiftet");
        cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.lock().expect("cache-lås forgiftet").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prosessvid standardcache. Sesjoner uten egen cache deler denne.
pub fn shared_cache() -> &'static SimulationCache {
    static CACHE: Lazy<SimulationCache> = Lazy::new(SimulationCache::new);
    &CACHE
}
