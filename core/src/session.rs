use std::sync::Arc;

use chrono::Utc;

use crate::cache::{shared_cache, SimulationCache};
use crate::history::HistoryStore;
use crate::metrics::{compute_summary, MetricsInputs};
use crate::records::evaluate_records;
use crate::simulate::{SimParams, SimulateError};
use crate::types::{ActivitySummary, RecordFlag, Sample};

/// Eksplisitt sesjonstilstand: aktiv aktivitet, cursor og historikk.
/// Eies av kalleren (presentasjonslaget) og sendes inn til hvert kall –
/// ingen ambient global tilstand. Droppes verdien, er sesjonen borte.
#[derive(Debug)]
pub struct SessionState {
    cache: &'static SimulationCache,
    params: Option<SimParams>,
    series: Arc<Vec<Sample>>,
    cursor: usize,
    active: bool,
    history: HistoryStore,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            cache: shared_cache(),
            params: None,
            series: Arc::new(Vec::new()),
            cursor: 0,
            active: false,
            history: HistoryStore::new(),
        }
    }

    /// Starter en ny aktivitet: genererer serien (cache-treff ved redraw
    /// med samme parametre) og nullstiller cursoren.
    pub fn start_activity(&mut self, params: SimParams) -> Result<(), SimulateError> {
        let series = self.cache.get_or_generate(&params)?;
        log::info!(
            "aktivitet startet: {} punkter, {:.0} sek, {:.2} km (seed={})",
            params.point_count,
            params.total_duration_sec,
            params.total_distance_km,
            params.seed
        );
        self.params = Some(params);
        self.series = series;
        self.cursor = 0;
        self.active = true;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Den genererte serien, for rute og varmekart. Tom før start.
    pub fn series(&self) -> &[Sample] {
        &self.series
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Flytter cursoren `steps` frem (klemmes til serielengden) og
    /// returnerer sammendraget for den nye posisjonen.
    pub fn advance(&mut self, steps: usize) -> ActivitySummary {
        if self.active {
            self.cursor = self.cursor.saturating_add(steps).min(self.series.len());
        }
        self.current_summary()
    }

    /// Sammendrag ved gjeldende cursor. Rent lesekall.
    pub fn current_summary(&self) -> ActivitySummary {
        let params = match &self.params {
            Some(p) => p,
            None => return ActivitySummary::zero(Utc::now()),
        };
        compute_summary(&MetricsInputs {
            series: &self.series,
            cursor: self.cursor,
            total_distance_km: params.total_distance_km,
            total_duration_sec: params.total_duration_sec,
            at: Utc::now(),
        })
    }

    /// Avslutter aktiviteten: cursor til slutten, endelig sammendrag inn
    /// i historikken og rekorder evaluert mot innslagene fra før.
    /// `None` når ingen aktivitet er aktiv.
    pub fn finish(&mut self) -> Option<(ActivitySummary, Vec<RecordFlag>)> {
        if !self.active {
            return None;
        }
        self.cursor = self.series.len();
        let summary = self.current_summary();

        let flags = evaluate_records(self.history.all(), &summary);
        self.history.append(summary.clone());
        self.active = false;

        Some((summary, flags))
    }

    /// Avbryter uten å lagre noe i historikken.
    pub fn reset(&mut self) {
        self.active = false;
        self.cursor = 0;
        self.params = None;
        self.series = Arc::new(Vec::new());
    }
}
