pub mod gbdt;
pub mod label;
pub mod linear;

pub mod classifier_trait;
pub mod factory;

pub use classifier_trait::ClassifierModel;
pub use factory::{ModelArtifact, ModelKind, ARTIFACT_VERSION};
pub use label::Label;
