use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::gbdt::GbdtClassifier;
use crate::models::linear::LinearClassifier;

/// Artifact format version written by `ModelArtifact::save`.
pub const ARTIFACT_VERSION: u32 = 1;

/// A persisted classifier: a format version plus one tagged model.
///
/// On disk this is a JSON object such as
/// `{"version": 1, "Linear": {"n_features": 4, ...}}`.
#[derive(Deserialize, Serialize, Debug)]
pub struct ModelArtifact {
    pub version: u32,

    #[serde(flatten)]
    pub model: ModelKind,
}

/// Supported model kinds and their fitted parameters.
#[derive(Deserialize, Serialize, Debug)]
pub enum ModelKind {
    Linear(LinearClassifier),
    GBDT(GbdtClassifier),
}

impl ModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Linear(_) => "linear",
            ModelKind::GBDT(_) => "gbdt",
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            ModelKind::Linear(model) => model.validate(),
            ModelKind::GBDT(model) => model.validate(),
        }
    }
}

impl ModelArtifact {
    pub fn new(model: ModelKind) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            model,
        }
    }

    /// Read and decode an artifact, rejecting unknown versions and
    /// internally inconsistent models.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PredictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|source| PredictError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(PredictError::UnsupportedVersion {
                found: artifact.version,
                supported: ARTIFACT_VERSION,
            });
        }
        artifact.model.validate()?;
        debug!(
            "Loaded {} model artifact from {} ({} bytes)",
            artifact.model.name(),
            path.display(),
            bytes.len()
        );
        Ok(artifact)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PredictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(PredictError::Encode)?;
        writer.flush().map_err(|source| PredictError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_classifier(self) -> Box<dyn ClassifierModel> {
        build_model(self.model)
    }
}

/// Build a boxed classifier from a decoded model.
pub fn build_model(model: ModelKind) -> Box<dyn ClassifierModel> {
    match model {
        ModelKind::Linear(model) => Box::new(model),
        ModelKind::GBDT(model) => Box::new(model),
    }
}
