use crate::scan::signals::Detectors;
use crate::types::config::QuotableBand;
use std::cmp::Reverse;

pub fn quotability(sentence: &str, detectors: &Detectors, band: &QuotableBand) -> u32 {
    let mut score = 0;
    if detectors.has_facts(sentence) {
        score += 3;
    }
    if detectors.has_date(sentence) {
        score += 2;
    }
    if detectors.has_location(sentence) {
        score += 1;
    }
    if detectors.has_category(sentence) {
        score += 1;
    }
    let length = sentence.chars().count();
    if (band.min_chars..=band.max_chars).contains(&length) {
        score += 1;
    }
    score
}

/// Sentences most likely to be lifted verbatim. Falls back to the opening
/// sentences so the list is never empty while the text has a sentence.
pub fn extract_repeatables(
    sentences: &[String],
    detectors: &Detectors,
    band: &QuotableBand,
) -> Vec<String> {
    let mut scored: Vec<(u32, &String)> = sentences
        .iter()
        .map(|sentence| (quotability(sentence, detectors, band), sentence))
        .collect();
    // stable, so ties keep document order
    scored.sort_by_key(|(score, _)| Reverse(*score));

    let picks: Vec<String> = scored
        .into_iter()
        .filter(|(score, _)| *score >= band.min_score)
        .take(band.max_picks)
        .map(|(_, sentence)| sentence.clone())
        .collect();

    if picks.is_empty() {
        sentences
            .iter()
            .take(band.fallback.max(1))
            .cloned()
            .collect()
    } else {
        picks
    }
}
