// src/fuzzy/mod.rs
pub mod matcher;
pub mod similarity;
