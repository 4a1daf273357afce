use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::math::Array2;
use crate::models::classifier_trait::{check_shape, ClassifierModel};
use crate::models::label::Label;

/// Linear classifier exported from a fitted logistic regression or linear SVM.
///
/// A binary model carries a single coefficient row and two classes; a
/// multi-class model carries one row per class (one-vs-rest or multinomial).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    pub n_features: usize,
    pub coefficients: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
    pub classes: Vec<Label>,
}

impl LinearClassifier {
    pub fn new(
        coefficients: Vec<Vec<f32>>,
        intercepts: Vec<f32>,
        classes: Vec<Label>,
    ) -> Result<Self> {
        let n_features = coefficients.first().map(Vec::len).unwrap_or(0);
        let model = LinearClassifier {
            n_features,
            coefficients,
            intercepts,
            classes,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(PredictError::InvalidArtifact(
                "linear model has no coefficient rows".to_string(),
            ));
        }
        if let Some(row) = self
            .coefficients
            .iter()
            .position(|w| w.len() != self.n_features)
        {
            return Err(PredictError::InvalidArtifact(format!(
                "coefficient row {} has {} entries, expected {}",
                row,
                self.coefficients[row].len(),
                self.n_features
            )));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(PredictError::InvalidArtifact(format!(
                "{} intercepts for {} coefficient rows",
                self.intercepts.len(),
                self.coefficients.len()
            )));
        }
        let expected_classes = if self.is_binary() {
            2
        } else {
            self.coefficients.len()
        };
        if self.classes.len() != expected_classes {
            return Err(PredictError::InvalidArtifact(format!(
                "expected {} classes, found {}",
                expected_classes,
                self.classes.len()
            )));
        }
        Ok(())
    }

    fn is_binary(&self) -> bool {
        self.coefficients.len() == 1
    }

    /// Raw scores `w·x + b`, one vector per sample with one entry per row of
    /// coefficients.
    pub fn decision_function(&self, x: &Array2<f32>) -> Result<Vec<Vec<f32>>> {
        check_shape(self, x)?;
        Ok(x.rows()
            .map(|sample| {
                self.coefficients
                    .iter()
                    .zip(&self.intercepts)
                    .map(|(w, b)| w.iter().zip(sample).map(|(w, v)| w * v).sum::<f32>() + b)
                    .collect()
            })
            .collect())
    }

    fn class_index(&self, scores: &[f32]) -> usize {
        if self.is_binary() {
            return usize::from(scores[0] > 0.0);
        }
        // first maximum wins on ties
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        best
    }
}

impl ClassifierModel for LinearClassifier {
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<Label>> {
        let scores = self.decision_function(x)?;
        Ok(scores
            .iter()
            .map(|s| self.classes[self.class_index(s)].clone())
            .collect())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "linear"
    }
}
