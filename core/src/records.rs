use crate::types::{ActivitySummary, RecordFlag};

/// Referansedistansen for tempo-rekorden (km) og vinduet rundt den.
pub const REFERENCE_DISTANCE_KM: f64 = 5.0;
pub const REFERENCE_WINDOW_KM: f64 = 0.5;

fn in_reference_window(distance_km: f64) -> bool {
    (distance_km - REFERENCE_DISTANCE_KM).abs() <= REFERENCE_WINDOW_KM
}

/// Evaluerer rekorder for `latest` mot `prior`: historikken SLIK DEN VAR
/// før `latest` ble lagt til (altså uten `latest` selv).
///
/// Ren funksjon av de to inputene; tom historikk gir tomt resultat.
pub fn evaluate_records(prior: &[ActivitySummary], latest: &ActivitySummary) -> Vec<RecordFlag> {
    let mut flags = Vec::new();

    if let Some(flag) = longest_distance(prior, latest) {
        flags.push(flag);
    }
    if let Some(flag) = best_reference_pace(prior, latest) {
        flags.push(flag);
    }

    flags
}

/// Lengste distanse: latest >= maks i historikken OG strengt større enn
/// nest siste innslag. Kravet mot nest siste hindrer at aller første
/// aktivitet alltid "vinner", men gir et pussig utfall ved likhet med et
/// eldre innslag – bevart med vilje for kompatibilitet (se DESIGN.md og
/// testene).
fn longest_distance(prior: &[ActivitySummary], latest: &ActivitySummary) -> Option<RecordFlag> {
    let previous = prior.last()?;

    let max_prior = prior
        .iter()
        .map(|s| s.distance_km)
        .fold(f64::NEG_INFINITY, f64::max);

    if latest.distance_km >= max_prior && latest.distance_km > previous.distance_km {
        Some(RecordFlag::LongestDistance {
            distance_km: latest.distance_km,
        })
    } else {
        None
    }
}

/// Beste 5 km-tempo: blant historikk-innslag med distanse i
/// referansevinduet, flagg når latest har strengt lavere snitt-tempo enn
/// minimum i kandidatmengden. Vindustesten gjelder kandidatene, ikke
/// latest (se DESIGN.md).
fn best_reference_pace(prior: &[ActivitySummary], latest: &ActivitySummary) -> Option<RecordFlag> {
    if !(latest.avg_pace_s_per_km > 0.0) {
        return None;
    }

    let best_prior = prior
        .iter()
        .filter(|s| in_reference_window(s.distance_km) && s.avg_pace_s_per_km > 0.0)
        .map(|s| s.avg_pace_s_per_km)
        .fold(f64::INFINITY, f64::min);

    if best_prior.is_finite() && latest.avg_pace_s_per_km < best_prior {
        Some(RecordFlag::BestReferencePace {
            pace_s_per_km: latest.avg_pace_s_per_km,
        })
    } else {
        None
    }
}
