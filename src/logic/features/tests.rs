//! Cross-module tests for the build -> encode -> align flow.

use std::collections::BTreeMap;

use crate::logic::artifacts::{Defaults, EncoderBank};

use super::*;

fn bank() -> EncoderBank {
    let mut vocabularies = BTreeMap::new();
    vocabularies.insert(
        "state".to_string(),
        vec![
            "Johor".to_string(),
            "Kedah".to_string(),
            "Selangor".to_string(),
        ],
    );
    vocabularies.insert(
        "category".to_string(),
        vec!["assault".to_string(), "property".to_string()],
    );
    vocabularies.insert(
        "type".to_string(),
        vec![
            "break_in".to_string(),
            "robbery".to_string(),
            "snatch_theft".to_string(),
        ],
    );
    EncoderBank::from_vocabularies(vocabularies).unwrap()
}

fn schema(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_flow_produces_schema_ordered_numbers() {
    let defaults: Defaults = [("population".to_string(), 250.0)].into_iter().collect();
    let request = PredictionRequest {
        state: "Kedah".to_string(),
        category: "property".to_string(),
        year: 2028,
    };

    let mut row = build_row(&request, "snatch_theft", &defaults);
    encode_row(&mut row, &bank()).unwrap();

    // schema order differs from insertion order on purpose
    let aligned = align_row(
        &row,
        &schema(&["year", "population", "type", "category", "state"]),
    )
    .unwrap();
    assert_eq!(aligned, vec![2028.0, 250.0, 2.0, 1.0, 1.0]);
}

#[test]
fn test_batch_rows_differ_only_in_the_type_column() {
    let defaults: Defaults = [("population".to_string(), 250.0)].into_iter().collect();
    let request = PredictionRequest {
        state: "Johor".to_string(),
        category: "assault".to_string(),
        year: 2026,
    };
    let feature_names = schema(&["state", "category", "type", "year", "population"]);

    let encoders = bank();
    let crime_types = encoders.vocabulary("type").unwrap().to_vec();
    let mut rows = Vec::new();
    for crime_type in &crime_types {
        let mut row = build_row(&request, crime_type, &defaults);
        encode_row(&mut row, &encoders).unwrap();
        rows.push(row);
    }

    let matrix = align_batch(&rows, &feature_names).unwrap();
    assert_eq!(matrix.shape(), &[3, 5]);
    for (i, _) in crime_types.iter().enumerate() {
        assert_eq!(matrix[[i, 0]], 0.0); // Johor
        assert_eq!(matrix[[i, 1]], 0.0); // assault
        assert_eq!(matrix[[i, 2]], i as f64); // candidate type
        assert_eq!(matrix[[i, 3]], 2026.0);
        assert_eq!(matrix[[i, 4]], 250.0);
    }
}

#[test]
fn test_skipping_the_encoder_pass_is_caught_at_alignment() {
    let request = PredictionRequest {
        state: "Johor".to_string(),
        category: "assault".to_string(),
        year: 2026,
    };
    let row = build_row(&request, "robbery", &Defaults::default());
    let err = align_row(&row, &schema(&["state"])).unwrap_err();
    assert!(matches!(
        err,
        crate::error::PredictError::UnencodedField { .. }
    ));
}
