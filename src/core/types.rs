// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Canonical disease name, exactly as it appears in the dataset.
pub type DiseaseName = String;

/// One dataset row: a disease and the symptoms that define it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub disease: DiseaseName,
    pub symptoms: Vec<String>,
}

impl SymptomRecord {
    pub fn new<D, I, S>(disease: D, symptoms: I) -> Self
    where
        D: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disease: disease.into(),
            symptoms: symptoms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Score of a single disease within one scoring call. Always in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseScore {
    pub disease: DiseaseName,
    pub score: f64,
}

/// Which stage of the fallback chain named the disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseSource {
    Primary,
    Fallback,
    CommonSymptomDefault,
}

/// Final answer handed back to the capture/UI layer.
/// `specialist` is always set; `disease` is absent only when nothing plausible matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub disease: Option<DiseaseName>,
    pub specialist: String,
    pub matched_symptoms: Vec<String>,
    pub source: Option<DiseaseSource>,
}

impl Recommendation {
    /// One-line summary suitable for a display widget.
    pub fn display_text(&self) -> String {
        match &self.disease {
            Some(disease) => format!("{} (see a {})", disease, self.specialist),
            None => format!("No condition identified (see a {})", self.specialist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_new_accepts_str_slices() {
        let record = SymptomRecord::new("Migraine", ["headache", "nausea"]);
        assert_eq!(record.disease, "Migraine");
        assert_eq!(record.symptoms, vec!["headache".to_string(), "nausea".to_string()]);
    }

    #[test]
    fn recommendation_serializes_source_in_snake_case() {
        let rec = Recommendation {
            disease: Some("Common Cold".into()),
            specialist: "General Physician".into(),
            matched_symptoms: vec!["fever".into()],
            source: Some(DiseaseSource::CommonSymptomDefault),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"source\":\"common_symptom_default\""));
        assert!(json.contains("\"disease\":\"Common Cold\""));
    }

    #[test]
    fn display_text_without_disease() {
        let rec = Recommendation {
            disease: None,
            specialist: "General Physician".into(),
            matched_symptoms: vec![],
            source: None,
        };
        assert_eq!(rec.display_text(), "No condition identified (see a General Physician)");
    }
}
