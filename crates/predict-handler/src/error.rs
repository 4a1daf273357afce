use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failures raised while loading a model artifact or predicting with it.
#[derive(Debug)]
pub enum PredictError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidArtifact(String),
    UnsupportedVersion {
        found: u32,
        supported: u32,
    },
    ShapeMismatch {
        expected: usize,
        found: usize,
    },
    Encode(serde_json::Error),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PredictError::Io { path, .. } => {
                write!(f, "Failed to read model artifact: {}", path.display())
            }
            PredictError::Decode { path, .. } => {
                write!(f, "Failed to decode model artifact: {}", path.display())
            }
            PredictError::InvalidArtifact(msg) => write!(f, "Invalid model artifact: {}", msg),
            PredictError::UnsupportedVersion { found, supported } => write!(
                f,
                "Unsupported model artifact version {} (supported: {})",
                found, supported
            ),
            PredictError::ShapeMismatch { expected, found } => write!(
                f,
                "Feature matrix has {} columns but the model expects {}",
                found, expected
            ),
            PredictError::Encode(_) => write!(f, "Failed to encode predictions"),
        }
    }
}

impl Error for PredictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictError::Io { source, .. } => Some(source),
            PredictError::Decode { source, .. } => Some(source),
            PredictError::Encode(source) => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
