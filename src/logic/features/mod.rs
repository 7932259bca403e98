//! Feature Engineering - from UI selections to a scoring matrix.
//!
//! ## Structure
//! - `row.rs` - request rows: defaults + selections, label encoding
//! - `align.rs` - projection onto the model schema, drift checks
//!
//! The flow is build -> encode -> align; each step is pure and the
//! artifacts only ever flow in as arguments.

pub mod align;
pub mod row;

pub use align::{align_batch, align_row, schema_hash, uncovered_features, unused_defaults};
pub use row::{build_row, encode_row, FeatureRow, FieldValue, PredictionRequest};

#[cfg(test)]
mod tests;
