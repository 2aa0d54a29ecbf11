// --- File: src/core/index.rs
use crate::core::normalizer::normalize_symptom;
use crate::core::types::{DiseaseName, SymptomRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Vocabulary of known symptoms plus the symptom <-> disease relations.
///
/// Built once from a full dataset and never mutated afterwards; a reload builds
/// a new index. Ordered collections keep every scan deterministic: the matcher
/// walks the vocabulary in sorted order and the scorer walks diseases by name.
#[derive(Debug, Clone, Default)]
pub struct SymptomIndex {
    vocabulary: BTreeSet<String>,
    symptom_to_diseases: BTreeMap<String, BTreeSet<DiseaseName>>,
    disease_to_symptoms: BTreeMap<DiseaseName, BTreeSet<String>>,
}

impl SymptomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index. Blank symptom cells are ignored; disease names are
    /// taken verbatim. A disease listed in several records gets the union of
    /// their symptoms.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SymptomRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.insert_record(record);
        }
        tracing::info!(
            symptoms = index.vocabulary.len(),
            diseases = index.disease_to_symptoms.len(),
            "symptom index built"
        );
        index
    }

    fn insert_record(&mut self, record: &SymptomRecord) {
        // A record with no usable symptoms still registers its disease; the
        // scorer skips diseases with an empty symptom set.
        let disease_symptoms = self
            .disease_to_symptoms
            .entry(record.disease.clone())
            .or_default();

        for raw in &record.symptoms {
            if raw.trim().is_empty() {
                continue;
            }
            let symptom = normalize_symptom(raw);
            self.vocabulary.insert(symptom.clone());
            self.symptom_to_diseases
                .entry(symptom.clone())
                .or_default()
                .insert(record.disease.clone());
            disease_symptoms.insert(symptom);
        }
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    pub fn contains_symptom(&self, symptom: &str) -> bool {
        self.vocabulary.contains(symptom)
    }

    /// Diseases in name order, each with its symptom set.
    pub fn diseases(&self) -> impl Iterator<Item = (&DiseaseName, &BTreeSet<String>)> {
        self.disease_to_symptoms.iter()
    }

    pub fn disease_count(&self) -> usize {
        self.disease_to_symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Diseases that list `symptom`. The lookup key is trimmed and lowercased.
    pub fn diseases_for_symptom(&self, symptom: &str) -> Option<&BTreeSet<DiseaseName>> {
        self.symptom_to_diseases.get(&normalize_symptom(symptom))
    }

    /// Symptoms of a disease, by exact disease name.
    pub fn symptoms_for_disease(&self, disease: &str) -> Option<&BTreeSet<String>> {
        self.disease_to_symptoms.get(disease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SymptomRecord> {
        vec![
            SymptomRecord::new("Migraine", ["headache", " Blurred Vision", "nausea"]),
            SymptomRecord::new("Malaria", ["chills", "high_fever", "nausea", "  "]),
            SymptomRecord::new("Migraine", ["stiff_neck"]),
        ]
    }

    #[test]
    fn vocabulary_is_normalized_and_sorted() {
        let index = SymptomIndex::build(&records());
        let vocab: Vec<&str> = index.vocabulary().iter().map(String::as_str).collect();
        assert_eq!(
            vocab,
            vec!["blurred vision", "chills", "headache", "high_fever", "nausea", "stiff_neck"]
        );
    }

    #[test]
    fn shared_symptoms_map_to_every_disease() {
        let index = SymptomIndex::build(&records());
        let diseases = index.diseases_for_symptom("NAUSEA ").unwrap();
        assert!(diseases.contains("Migraine"));
        assert!(diseases.contains("Malaria"));
    }

    #[test]
    fn repeated_disease_rows_are_merged() {
        let index = SymptomIndex::build(&records());
        let migraine = index.symptoms_for_disease("Migraine").unwrap();
        assert_eq!(migraine.len(), 4);
        assert!(migraine.contains("stiff_neck"));
        assert_eq!(index.disease_count(), 2);
    }

    #[test]
    fn vocabulary_and_relation_keys_agree() {
        let index = SymptomIndex::build(&records());
        let keys: BTreeSet<String> = index.symptom_to_diseases.keys().cloned().collect();
        assert_eq!(&keys, index.vocabulary());
    }

    #[test]
    fn disease_names_are_not_normalized() {
        let index = SymptomIndex::build(&[SymptomRecord::new("Diabetes ", ["polyuria"])]);
        assert!(index.symptoms_for_disease("Diabetes ").is_some());
        assert!(index.symptoms_for_disease("Diabetes").is_none());
    }

    #[test]
    fn empty_dataset_gives_empty_index() {
        let index = SymptomIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.disease_count(), 0);
    }
}
