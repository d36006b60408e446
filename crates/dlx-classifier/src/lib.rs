//! Dislocation severity classification.
//!
//! The analytical core of the scanner: classifies per-ticker price facts
//! into a severity bucket, derives hypothesis weights, and infers the
//! primary/secondary/contradicted hypotheses. Everything here is a pure
//! function over immutable inputs.

pub mod classifier;
pub mod config;
pub mod inference;
pub mod weights;

pub use classifier::{DislocationClassifier, DislocationResult};
pub use config::ClassifierConfig;
pub use inference::{Inference, InferenceEngine};
pub use weights::{
    Confidence, HypothesisTag, HypothesisWeightGenerator, HypothesisWeights, WeightRecord,
};
