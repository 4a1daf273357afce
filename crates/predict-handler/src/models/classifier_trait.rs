use crate::error::{PredictError, Result};
use crate::math::Array2;
use crate::models::label::Label;

/// A persisted, already trained classifier as seen by the handler.
///
/// The handler only ever asks for predictions; fitting is done by whatever
/// tooling produced the artifact.
pub trait ClassifierModel {
    /// Predict one label per row of `x`.
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<Label>>;

    /// Number of feature columns the model was trained on.
    fn n_features(&self) -> usize;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Reject feature matrices whose width differs from the model's.
pub fn check_shape(model: &dyn ClassifierModel, x: &Array2<f32>) -> Result<()> {
    if x.ncols() != model.n_features() {
        return Err(PredictError::ShapeMismatch {
            expected: model.n_features(),
            found: x.ncols(),
        });
    }
    Ok(())
}
