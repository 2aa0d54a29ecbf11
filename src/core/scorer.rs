// src/core/scorer.rs
use crate::core::index::SymptomIndex;
use crate::core::types::{DiseaseName, DiseaseScore};
use std::collections::BTreeSet;

/// Scores at or below this are treated as no prediction.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Ranks diseases by how well their symptom sets overlap the matched symptoms.
///
/// `score = 0.5 * disease_coverage + 0.5 * input_coverage`, where disease coverage
/// is the share of the disease's symptoms that were matched and input coverage is
/// the share of matched symptoms that belong to the disease.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiseaseScorer;

impl DiseaseScorer {
    pub fn new() -> Self {
        Self
    }

    /// Best disease for `matched`, or `None` when nothing was matched, the index
    /// has no diseases, or the winning score does not clear `MIN_CONFIDENCE`.
    /// Equal top scores resolve to the disease whose name sorts first.
    pub fn predict(&self, matched: &[String], index: &SymptomIndex) -> Option<DiseaseName> {
        if matched.is_empty() {
            return None;
        }

        let mut best: Option<DiseaseScore> = None;
        for candidate in self.scores(matched, index) {
            let beats = best.as_ref().map_or(true, |current| candidate.score > current.score);
            if beats {
                best = Some(candidate);
            }
        }

        best.filter(|winner| winner.score > MIN_CONFIDENCE)
            .map(|winner| winner.disease)
    }

    /// Every disease with a score above `MIN_CONFIDENCE`, best first, ties by name.
    pub fn rank(&self, matched: &[String], index: &SymptomIndex) -> Vec<DiseaseScore> {
        if matched.is_empty() {
            return vec![];
        }
        let mut ranked: Vec<DiseaseScore> = self
            .scores(matched, index)
            .filter(|s| s.score > MIN_CONFIDENCE)
            .collect();
        // Stable sort keeps name order among equal scores.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    fn scores<'a>(
        &'a self,
        matched: &'a [String],
        index: &'a SymptomIndex,
    ) -> impl Iterator<Item = DiseaseScore> + 'a {
        index
            .diseases()
            .filter(|(_, symptoms)| !symptoms.is_empty())
            .map(move |(disease, symptoms)| DiseaseScore {
                disease: disease.clone(),
                score: Self::score(matched, symptoms),
            })
    }

    fn score(matched: &[String], disease_symptoms: &BTreeSet<String>) -> f64 {
        let matching = matched
            .iter()
            .filter(|symptom| disease_symptoms.contains(symptom.as_str()))
            .count() as f64;
        let disease_coverage = matching / disease_symptoms.len() as f64;
        let input_coverage = matching / matched.len() as f64;
        0.5 * disease_coverage + 0.5 * input_coverage
    }
}
