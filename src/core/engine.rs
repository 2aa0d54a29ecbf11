use crate::core::index::SymptomIndex;
use crate::core::scorer::DiseaseScorer;
use crate::core::specialist::doctor_for;
use crate::core::types::{DiseaseName, DiseaseScore, DiseaseSource, Recommendation, SymptomRecord};
use crate::fuzzy::matcher::SymptomMatcher;

pub const DEFAULT_DISEASE: &str = "Common Cold";

/// Symptoms common enough that, with no confident prediction, the default disease is named.
pub const COMMON_SYMPTOMS: [&str; 5] = ["fever", "headache", "cough", "cold", "flu"];

/// Alternate predictor consulted when the built-in scorer has no answer.
/// Closures `Fn(&[String]) -> Option<String>` implement it directly.
pub trait FallbackPredictor {
    fn predict(&self, symptoms: &[String]) -> Option<DiseaseName>;
}

impl<F> FallbackPredictor for F
where
    F: Fn(&[String]) -> Option<DiseaseName>,
{
    fn predict(&self, symptoms: &[String]) -> Option<DiseaseName> {
        self(symptoms)
    }
}

/// A fallback that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackPredictor for NoFallback {
    fn predict(&self, _symptoms: &[String]) -> Option<DiseaseName> {
        None
    }
}

/// Stages tried in order; the first one that names a disease wins.
const STAGES: [DiseaseSource; 3] = [
    DiseaseSource::Primary,
    DiseaseSource::Fallback,
    DiseaseSource::CommonSymptomDefault,
];

// The engine owns the index for its lifetime. Reads go through `&self`, so one
// engine can serve many readers; `reload` needs `&mut self` and swaps in a
// freshly built index.
pub struct RecommendationEngine {
    index: SymptomIndex,
    matcher: SymptomMatcher,
    scorer: DiseaseScorer,
}

impl RecommendationEngine {
    pub fn new(index: SymptomIndex) -> Self {
        Self::with_matcher(index, SymptomMatcher::default())
    }

    pub fn with_matcher(index: SymptomIndex, matcher: SymptomMatcher) -> Self {
        Self {
            index,
            matcher,
            scorer: DiseaseScorer::new(),
        }
    }

    pub fn from_records(records: &[SymptomRecord]) -> Self {
        Self::new(SymptomIndex::build(records))
    }

    pub fn index(&self) -> &SymptomIndex {
        &self.index
    }

    pub fn matcher(&self) -> &SymptomMatcher {
        &self.matcher
    }

    /// Replaces the whole index with one built from `records`.
    pub fn reload(&mut self, records: &[SymptomRecord]) {
        let fresh = SymptomIndex::build(records);
        self.index = fresh;
        tracing::info!(diseases = self.index.disease_count(), "symptom index reloaded");
    }

    pub fn match_symptoms(&self, text: &str) -> Vec<String> {
        self.matcher.find_matches(text, &self.index)
    }

    /// Diseases ranked by score for already-matched symptoms.
    pub fn rank(&self, matched: &[String]) -> Vec<DiseaseScore> {
        self.scorer.rank(matched, &self.index)
    }

    /// Runs the fallback chain over matched symptoms. Blank entries are
    /// discarded first; with nothing left there is no disease.
    pub fn resolve_disease(
        &self,
        matched: &[String],
        fallback: &dyn FallbackPredictor,
    ) -> Option<(DiseaseName, DiseaseSource)> {
        let symptoms: Vec<String> = matched
            .iter()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect();
        if symptoms.is_empty() {
            tracing::debug!("no symptoms matched");
            return None;
        }

        STAGES.iter().find_map(|&stage| {
            let disease = self.run_stage(stage, &symptoms, fallback)?;
            tracing::debug!(?stage, disease = disease.as_str(), "disease resolved");
            Some((disease, stage))
        })
    }

    fn run_stage(
        &self,
        stage: DiseaseSource,
        symptoms: &[String],
        fallback: &dyn FallbackPredictor,
    ) -> Option<DiseaseName> {
        match stage {
            DiseaseSource::Primary => self.scorer.predict(symptoms, &self.index),
            DiseaseSource::Fallback => fallback
                .predict(symptoms)
                .filter(|disease| !disease.trim().is_empty()),
            DiseaseSource::CommonSymptomDefault => symptoms
                .iter()
                .any(|s| is_common_symptom(s))
                .then(|| DEFAULT_DISEASE.to_string()),
        }
    }

    /// Full pipeline: free text -> matched symptoms -> disease -> specialist.
    pub fn recommend(&self, text: &str, fallback: &dyn FallbackPredictor) -> Recommendation {
        let matched = self.match_symptoms(text);
        self.recommend_for_symptoms(matched, fallback)
    }

    pub fn recommend_for_symptoms(
        &self,
        matched: Vec<String>,
        fallback: &dyn FallbackPredictor,
    ) -> Recommendation {
        let resolved = self.resolve_disease(&matched, fallback);
        let (disease, source) = match resolved {
            Some((disease, source)) => (Some(disease), Some(source)),
            None => (None, None),
        };
        Recommendation {
            specialist: doctor_for(disease.as_deref()).to_string(),
            disease,
            matched_symptoms: matched,
            source,
        }
    }
}

fn is_common_symptom(symptom: &str) -> bool {
    let lowered = symptom.to_lowercase();
    COMMON_SYMPTOMS.contains(&lowered.as_str())
}
