pub mod filesystem;
pub mod segment;
pub mod signals;

use crate::types::report::TextStats;
use crate::types::scoring::round1;
use segment::{
    avg_sentence_length, first_n_words, longest_paragraph_words, split_paragraphs,
    split_sentences, words,
};
use signals::{Detectors, LeadChecks};

/// Whole-text signals, evaluated once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSignals {
    pub number: bool,
    pub currency: bool,
    pub year: bool,
    pub month: bool,
    pub location: bool,
    pub category: bool,
    pub best_for: bool,
    pub availability: bool,
    pub superlative: bool,
    pub bullets: bool,
    pub headings: bool,
    pub cta: bool,
}

impl TextSignals {
    pub fn facts(&self) -> bool {
        self.number || self.currency
    }

    pub fn date(&self) -> bool {
        self.year || self.month
    }

    pub fn structure(&self) -> bool {
        self.bullets || self.headings
    }
}

#[derive(Debug, Clone)]
pub struct TextModel {
    pub lead: String,
    pub sentences: Vec<String>,
    pub paragraph_count: usize,
    pub word_count: usize,
    pub avg_sentence_words: f32,
    pub longest_paragraph_words: usize,
    pub signals: TextSignals,
    pub lead_checks: LeadChecks,
}

impl TextModel {
    pub fn stats(&self) -> TextStats {
        TextStats {
            word_count: self.word_count,
            sentence_count: self.sentences.len(),
            paragraph_count: self.paragraph_count,
            avg_sentence_words: round1(self.avg_sentence_words),
            longest_paragraph_words: self.longest_paragraph_words,
            bullets_present: self.signals.bullets,
            headings_present: self.signals.headings,
        }
    }
}

/// Segments `text` and evaluates every whole-text and lead signal.
/// Returns `None` when nothing but whitespace was supplied.
pub fn discover(text: &str, lead_words: usize, detectors: &Detectors) -> Option<TextModel> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lead = first_n_words(text, lead_words);
    let signals = TextSignals {
        number: detectors.has_number(text),
        currency: detectors.has_currency(text),
        year: detectors.has_year(text),
        month: detectors.has_month(text),
        location: detectors.has_location(text),
        category: detectors.has_category(text),
        best_for: detectors.has_best_for(text),
        availability: detectors.has_availability(text),
        superlative: detectors.has_superlative(text),
        bullets: detectors.has_bullets(text),
        headings: detectors.has_headings(text),
        cta: detectors.has_cta(text),
    };
    let lead_checks = detectors.lead_checks(&lead);

    Some(TextModel {
        sentences: split_sentences(text),
        paragraph_count: split_paragraphs(text).len(),
        word_count: words(text).len(),
        avg_sentence_words: avg_sentence_length(text),
        longest_paragraph_words: longest_paragraph_words(text),
        lead,
        signals,
        lead_checks,
    })
}
