//! predict-handler: serverless prediction shim for a persisted classifier.
//!
//! The handler loads a model artifact from disk, predicts the class of one
//! fixed feature vector and wraps the encoded labels in an HTTP-style
//! response envelope with permissive CORS headers.
//!
//! The crate keeps the model formats behind the small `ClassifierModel`
//! trait so the Lambda entry point and the local CLI share one code path.
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod math;
pub mod models;
pub mod response;
