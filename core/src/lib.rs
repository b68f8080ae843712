pub mod cache;
pub mod history;
pub mod metrics;
pub mod records;
pub mod report;
pub mod session;
pub mod simulate;
pub mod types;

pub use cache::{shared_cache, SimulationCache};
pub use history::HistoryStore;
pub use metrics::{compute_summary, moving_time_sec, pause_time_sec, MetricsInputs};
pub use records::evaluate_records;
pub use report::{format_duration_hms, format_pace_min_km, SessionReport};
pub use session::SessionState;
pub use simulate::{heat_weight, simulate_activity, SimParams, SimulateError};
pub use types::{ActivitySummary, RecordFlag, Sample, AUTO_PAUSE_THRESHOLD_S_PER_KM};
