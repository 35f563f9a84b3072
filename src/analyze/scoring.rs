use crate::scan::TextModel;
use crate::types::config::ScoringWeights;
use crate::types::scoring::{Score, ScoreCard};

pub fn clarity_score(model: &TextModel, weights: &ScoringWeights) -> Score {
    let mut score: Score = 0.0;
    if model.signals.category {
        score += weights.category;
    }
    if model.signals.location {
        score += weights.location;
    }
    if model.signals.best_for {
        score += weights.best_for;
    }
    score.clamp(0.0, weights.clarity_max)
}

pub fn verifiability_score(model: &TextModel, weights: &ScoringWeights) -> Score {
    let mut score: Score = 0.0;
    if model.signals.facts() {
        score += weights.facts;
    }
    if model.signals.date() {
        score += weights.date;
    }
    if model.signals.availability {
        score += weights.availability;
    }
    score.clamp(0.0, weights.verifiability_max)
}

pub fn structure_score(model: &TextModel, weights: &ScoringWeights) -> Score {
    let mut score: Score = 0.0;
    if model.signals.structure() {
        score += weights.layout;
    }
    if !model.signals.superlative {
        score += weights.restraint;
    }
    if model.sentences.len() >= weights.min_sentences {
        score += weights.sentence_flow;
    }
    score.clamp(0.0, weights.structure_max)
}

pub fn score_card(model: &TextModel, weights: &ScoringWeights) -> ScoreCard {
    let clarity = clarity_score(model, weights);
    let verifiability = verifiability_score(model, weights);
    let structure = structure_score(model, weights);
    tracing::debug!(clarity, verifiability, structure, "sub-scores computed");
    ScoreCard::new(clarity, verifiability, structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{discover, signals::Detectors};

    fn model(text: &str) -> TextModel {
        discover(text, 95, &Detectors::default()).expect("text should not be blank")
    }

    #[test]
    fn clarity_rewards_category_location_and_audience() {
        let weights = ScoringWeights::default();
        assert_eq!(clarity_score(&model("A hotel in Soller."), &weights), 3.0);
        assert_eq!(
            clarity_score(&model("A hotel in Soller, ideal for couples."), &weights),
            4.0
        );
        assert_eq!(clarity_score(&model("Somewhere lovely."), &weights), 0.0);
    }

    #[test]
    fn clarity_is_capped() {
        let weights = ScoringWeights {
            category: 3.0,
            ..ScoringWeights::default()
        };
        assert_eq!(
            clarity_score(&model("A hotel in Soller, ideal for couples."), &weights),
            4.0
        );
    }

    #[test]
    fn verifiability_counts_facts_dates_and_availability() {
        let weights = ScoringWeights::default();
        assert_eq!(
            verifiability_score(&model("From €450, available from May 2026."), &weights),
            3.0
        );
        assert_eq!(verifiability_score(&model("Opens soon."), &weights), 0.0);
    }

    #[test]
    fn structure_penalises_superlatives_and_rewards_layout() {
        let weights = ScoringWeights::default();
        let plain = model("One. Two. Three.");
        assert_eq!(structure_score(&plain, &weights), 2.0);
        let listed = model("Highlights:\n- spa\n- pool. Open daily. Closed never.");
        assert_eq!(structure_score(&listed, &weights), 3.0);
        let boastful = model("The most iconic place.");
        assert_eq!(structure_score(&boastful, &weights), 0.0);
    }
}
