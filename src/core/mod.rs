// src/core/mod.rs
pub mod engine;
pub mod index;
pub mod normalizer;
pub mod scorer;
pub mod specialist;
pub mod types;
