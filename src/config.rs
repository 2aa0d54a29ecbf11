// src/config.rs
use crate::error::{Result, TriageError};
use crate::fuzzy::matcher::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "symptom-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "TRIAGE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub match_threshold: f64,
    pub dataset_dir: PathBuf,
    pub symptoms_file: String,
    pub log_filter: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_THRESHOLD,
            dataset_dir: PathBuf::from("data"),
            symptoms_file: "symptoms.csv".to_string(),
            log_filter: "triage_core=info".to_string(),
        }
    }
}

impl TriageConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from an explicit path, else `$TRIAGE_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(TriageError::Config(format!(
                "match_threshold must be within [0, 1], got {}",
                self.match_threshold
            )));
        }
        if self.symptoms_file.trim().is_empty() {
            return Err(TriageError::Config("symptoms_file is empty".to_string()));
        }
        Ok(())
    }

    pub fn symptoms_path(&self) -> PathBuf {
        self.dataset_dir.join(&self.symptoms_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_engine_constants() {
        let config = TriageConfig::default();
        assert_eq!(config.match_threshold, 0.7);
        assert_eq!(config.symptoms_path(), PathBuf::from("data").join("symptoms.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "match_threshold": 0.8 }}"#).unwrap();
        let config = TriageConfig::from_file(file.path()).unwrap();
        assert_eq!(config.match_threshold, 0.8);
        assert_eq!(config.symptoms_file, "symptoms.csv");
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "match_threshold": 1.5 }}"#).unwrap();
        let err = TriageConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = TriageConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TriageError::Json(_)));
    }

    #[test]
    fn app_name_is_stable() {
        assert_eq!(APP_NAME, "symptom-triage");
    }
}
