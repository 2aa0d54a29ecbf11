// src/lib.rs

pub mod c_api;
pub mod catalog;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod fuzzy;
pub mod transcript;

pub use crate::core::engine::{FallbackPredictor, NoFallback, RecommendationEngine};
pub use crate::core::index::SymptomIndex;
pub use crate::core::types::{DiseaseSource, Recommendation, SymptomRecord};
pub use crate::error::{Result, TriageError};
