//! Prediction Pipeline - the end-to-end scoring run.
//!
//! One call per user action: build a row for every candidate crime type,
//! encode the categorical fields, align to the model schema, score the
//! whole batch once, then rank and label. Any failure aborts the entire
//! run; a top list computed over a subset of candidates is not a result.

use chrono::Utc;
use uuid::Uuid;

use crate::constants::TYPE_FEATURE;
use crate::error::PredictResult;
use crate::logic::artifacts::ArtifactBundle;
use crate::logic::features::{align_batch, build_row, encode_row, PredictionRequest};
use crate::logic::risk::{alert_tier, rank, PredictionReport, TypeScore, TOP_PREDICTIONS};

/// Score every candidate crime type for the selected state, category and
/// year, and return the ranked, labeled report.
///
/// Candidates are the full fitted `type` vocabulary, so the report can
/// never miss a crime type the model knows about.
pub fn predict_top_crimes(
    bundle: &ArtifactBundle<'_>,
    request: &PredictionRequest,
) -> PredictResult<PredictionReport> {
    let started = std::time::Instant::now();
    let run_id = Uuid::new_v4();

    let crime_types = bundle.encoders.vocabulary(TYPE_FEATURE)?;

    let mut rows = Vec::with_capacity(crime_types.len());
    for crime_type in crime_types {
        let mut row = build_row(request, crime_type, bundle.defaults);
        encode_row(&mut row, bundle.encoders)?;
        rows.push(row);
    }

    let matrix = align_batch(&rows, bundle.model.feature_names())?;
    let scores = bundle.model.predict(&matrix)?;

    let paired: Vec<TypeScore> = crime_types
        .iter()
        .zip(scores)
        .map(|(crime_type, score)| TypeScore {
            crime_type: crime_type.clone(),
            score,
        })
        .collect();

    let top = rank(paired, TOP_PREDICTIONS);
    let alert = alert_tier(&top);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    log::info!(
        "prediction run {} done: state={} category={} year={} candidates={} alert={} ({} ms)",
        run_id,
        request.state,
        request.category,
        request.year,
        crime_types.len(),
        alert,
        elapsed_ms
    );

    Ok(PredictionReport {
        run_id,
        generated_at: Utc::now(),
        state: request.state.clone(),
        category: request.category.clone(),
        year: request.year,
        top,
        alert,
        elapsed_ms,
    })
}
