use crate::types::ActivitySummary;

/// Append-only historikk over fullførte aktiviteter, i fullføringsrekkefølge.
/// Lever kun så lenge sesjonen lever; ingenting persisteres til disk.
/// Ingen operasjoner muterer eller fjerner eksisterende innslag.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<ActivitySummary>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legger til et sammendrag bakerst. Feiler aldri.
    pub fn append(&mut self, summary: ActivitySummary) {
        log::info!(
            "aktivitet lagret i historikk: {:.2} km, {} sek, {} kcal",
            summary.distance_km,
            summary.duration_sec,
            summary.calories_kcal
        );
        self.entries.push(summary);
    }

    /// Kronologisk lesevisning.
    pub fn all(&self) -> &[ActivitySummary] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ActivitySummary> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
