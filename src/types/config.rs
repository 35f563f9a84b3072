use crate::error::ReadinessError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadinessConfig {
    pub analyzer: Option<AnalyzerConfig>,
    pub quotable: Option<QuotableConfig>,
    pub findings: Option<FindingsConfig>,
    pub weights: Option<WeightsConfig>,
    pub keywords: Option<KeywordsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    pub lead_words: Option<usize>,
    pub max_input_chars: Option<usize>,
    pub on_oversize: Option<Oversize>,
    pub benchmark: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Oversize {
    #[default]
    Reject,
    Truncate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotableConfig {
    pub min_chars: Option<usize>,
    pub max_chars: Option<usize>,
    pub min_score: Option<u32>,
    pub max_picks: Option<usize>,
    pub fallback: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindingsConfig {
    pub max_per_section: Option<usize>,
    pub long_paragraph_words: Option<usize>,
    pub long_sentence_words: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub category: Option<f32>,
    pub location: Option<f32>,
    pub best_for: Option<f32>,
    pub clarity_max: Option<f32>,
    pub facts: Option<f32>,
    pub date: Option<f32>,
    pub availability: Option<f32>,
    pub verifiability_max: Option<f32>,
    pub layout: Option<f32>,
    pub restraint: Option<f32>,
    pub sentence_flow: Option<f32>,
    pub structure_max: Option<f32>,
    pub min_sentences: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    pub locations: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub best_for: Option<Vec<String>>,
    pub why: Option<Vec<String>>,
    pub so_what: Option<Vec<String>>,
    pub cta: Option<Vec<String>>,
    pub superlatives: Option<Vec<String>>,
    pub availability: Option<Vec<String>>,
    pub headings: Option<Vec<String>>,
}

/// Resolved input guard applied before text reaches the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_input_chars: usize,
    pub on_oversize: Oversize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_chars: 50_000,
            on_oversize: Oversize::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotableBand {
    pub min_chars: usize,
    pub max_chars: usize,
    pub min_score: u32,
    pub max_picks: usize,
    pub fallback: usize,
}

impl Default for QuotableBand {
    fn default() -> Self {
        Self {
            min_chars: 45,
            max_chars: 180,
            min_score: 3,
            max_picks: 6,
            fallback: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FindingThresholds {
    pub max_per_section: usize,
    pub long_paragraph_words: usize,
    pub long_sentence_words: f32,
}

impl Default for FindingThresholds {
    fn default() -> Self {
        Self {
            max_per_section: 6,
            long_paragraph_words: 120,
            long_sentence_words: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub category: f32,
    pub location: f32,
    pub best_for: f32,
    pub clarity_max: f32,
    pub facts: f32,
    pub date: f32,
    pub availability: f32,
    pub verifiability_max: f32,
    pub layout: f32,
    pub restraint: f32,
    pub sentence_flow: f32,
    pub structure_max: f32,
    pub min_sentences: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: 1.5,
            location: 1.5,
            best_for: 1.0,
            clarity_max: 4.0,
            facts: 1.0,
            date: 1.0,
            availability: 1.0,
            verifiability_max: 3.0,
            layout: 1.0,
            restraint: 1.0,
            sentence_flow: 1.0,
            structure_max: 3.0,
            min_sentences: 3,
        }
    }
}

impl ScoringWeights {
    fn values(&self) -> [(&'static str, f32); 12] {
        [
            ("category", self.category),
            ("location", self.location),
            ("best_for", self.best_for),
            ("clarity_max", self.clarity_max),
            ("facts", self.facts),
            ("date", self.date),
            ("availability", self.availability),
            ("verifiability_max", self.verifiability_max),
            ("layout", self.layout),
            ("restraint", self.restraint),
            ("sentence_flow", self.sentence_flow),
            ("structure_max", self.structure_max),
        ]
    }
}

/// Keyword lists behind the substring detectors. All entries are matched
/// against lowercased text, so they are stored lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct Keywords {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    pub best_for: Vec<String>,
    pub why: Vec<String>,
    pub so_what: Vec<String>,
    pub cta: Vec<String>,
    pub superlatives: Vec<String>,
    pub availability: Vec<String>,
    pub headings: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            locations: owned(&[" in ", " at ", " on ", " near ", " within ", "based in"]),
            categories: owned(&[
                "hotel",
                "resort",
                "villa",
                "villas",
                "lodge",
                "retreat",
                "finca",
                "estate",
                "private island",
            ]),
            best_for: owned(&[
                "best for",
                "ideal for",
                "perfect for",
                "suited to",
                "designed for",
            ]),
            why: owned(&[
                "because",
                "to mark",
                "to celebrate",
                "to meet demand",
                "in response",
                "driven by",
                "as travellers",
                "so guests can",
                "so that",
                "to help",
            ]),
            so_what: owned(&[
                "so that",
                "so guests",
                "meaning",
                "which means",
                "this means",
                "allows guests",
            ]),
            cta: owned(&[
                "book", "enquir", "email", "call", "phone", "dm", "link", "website",
            ]),
            superlatives: owned(&[
                "world-class",
                "iconic",
                "renowned",
                "unrivalled",
                "award-winning",
                "number one",
                "no. 1",
                "ultimate",
                "once-in-a-lifetime",
                "best",
                "most luxurious",
            ]),
            availability: owned(&["minimum", "subject to availability", "available"]),
            headings: owned(&[
                "key facts",
                "highlights",
                "at a glance",
                "overview",
                "details",
                "included",
                "inclusions",
            ]),
        }
    }
}

impl Keywords {
    fn lists(&self) -> [(&'static str, &[String]); 9] {
        [
            ("locations", self.locations.as_slice()),
            ("categories", self.categories.as_slice()),
            ("best_for", self.best_for.as_slice()),
            ("why", self.why.as_slice()),
            ("so_what", self.so_what.as_slice()),
            ("cta", self.cta.as_slice()),
            ("superlatives", self.superlatives.as_slice()),
            ("availability", self.availability.as_slice()),
            ("headings", self.headings.as_slice()),
        ]
    }
}

/// Everything the analyzer needs, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    pub lead_words: usize,
    pub benchmark: f32,
    pub quotable: QuotableBand,
    pub findings: FindingThresholds,
    pub weights: ScoringWeights,
    pub keywords: Keywords,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            lead_words: 95,
            benchmark: 6.2,
            quotable: QuotableBand::default(),
            findings: FindingThresholds::default(),
            weights: ScoringWeights::default(),
            keywords: Keywords::default(),
        }
    }
}

fn override_list(target: &mut Vec<String>, source: &Option<Vec<String>>) {
    if let Some(items) = source {
        // Whitespace is significant for entries like " in ", so only case is normalised.
        *target = items.iter().map(|item| item.to_lowercase()).collect();
    }
}

impl ReadinessConfig {
    pub fn input_limits(&self) -> InputLimits {
        let defaults = InputLimits::default();
        match &self.analyzer {
            Some(analyzer) => InputLimits {
                max_input_chars: analyzer.max_input_chars.unwrap_or(defaults.max_input_chars),
                on_oversize: analyzer.on_oversize.unwrap_or(defaults.on_oversize),
            },
            None => defaults,
        }
    }

    pub fn settings(&self) -> AnalyzerSettings {
        let mut settings = AnalyzerSettings::default();

        if let Some(analyzer) = &self.analyzer {
            settings.lead_words = analyzer.lead_words.unwrap_or(settings.lead_words);
            settings.benchmark = analyzer.benchmark.unwrap_or(settings.benchmark);
        }

        if let Some(quotable) = &self.quotable {
            let band = &mut settings.quotable;
            band.min_chars = quotable.min_chars.unwrap_or(band.min_chars);
            band.max_chars = quotable.max_chars.unwrap_or(band.max_chars);
            band.min_score = quotable.min_score.unwrap_or(band.min_score);
            band.max_picks = quotable.max_picks.unwrap_or(band.max_picks);
            band.fallback = quotable.fallback.unwrap_or(band.fallback);
        }

        if let Some(findings) = &self.findings {
            let thresholds = &mut settings.findings;
            thresholds.max_per_section = findings
                .max_per_section
                .unwrap_or(thresholds.max_per_section);
            thresholds.long_paragraph_words = findings
                .long_paragraph_words
                .unwrap_or(thresholds.long_paragraph_words);
            thresholds.long_sentence_words = findings
                .long_sentence_words
                .unwrap_or(thresholds.long_sentence_words);
        }

        if let Some(weights) = &self.weights {
            let w = &mut settings.weights;
            w.category = weights.category.unwrap_or(w.category);
            w.location = weights.location.unwrap_or(w.location);
            w.best_for = weights.best_for.unwrap_or(w.best_for);
            w.clarity_max = weights.clarity_max.unwrap_or(w.clarity_max);
            w.facts = weights.facts.unwrap_or(w.facts);
            w.date = weights.date.unwrap_or(w.date);
            w.availability = weights.availability.unwrap_or(w.availability);
            w.verifiability_max = weights.verifiability_max.unwrap_or(w.verifiability_max);
            w.layout = weights.layout.unwrap_or(w.layout);
            w.restraint = weights.restraint.unwrap_or(w.restraint);
            w.sentence_flow = weights.sentence_flow.unwrap_or(w.sentence_flow);
            w.structure_max = weights.structure_max.unwrap_or(w.structure_max);
            w.min_sentences = weights.min_sentences.unwrap_or(w.min_sentences);
        }

        if let Some(keywords) = &self.keywords {
            let k = &mut settings.keywords;
            override_list(&mut k.locations, &keywords.locations);
            override_list(&mut k.categories, &keywords.categories);
            override_list(&mut k.best_for, &keywords.best_for);
            override_list(&mut k.why, &keywords.why);
            override_list(&mut k.so_what, &keywords.so_what);
            override_list(&mut k.cta, &keywords.cta);
            override_list(&mut k.superlatives, &keywords.superlatives);
            override_list(&mut k.availability, &keywords.availability);
            override_list(&mut k.headings, &keywords.headings);
        }

        settings
    }

    pub fn validate(&self) -> Result<(), ReadinessError> {
        let limits = self.input_limits();
        if limits.max_input_chars == 0 {
            return Err(ReadinessError::ConfigParse(
                "analyzer.max_input_chars must be greater than 0".to_string(),
            ));
        }

        let settings = self.settings();
        if settings.lead_words == 0 {
            return Err(ReadinessError::ConfigParse(
                "analyzer.lead_words must be greater than 0".to_string(),
            ));
        }
        if !settings.benchmark.is_finite() || !(0.0..=10.0).contains(&settings.benchmark) {
            return Err(ReadinessError::ConfigParse(
                "analyzer.benchmark must be between 0.0 and 10.0".to_string(),
            ));
        }

        let quotable = settings.quotable;
        if quotable.min_chars > quotable.max_chars {
            return Err(ReadinessError::ConfigParse(format!(
                "quotable.min_chars ({}) must not exceed quotable.max_chars ({})",
                quotable.min_chars, quotable.max_chars
            )));
        }
        if quotable.max_picks == 0 {
            return Err(ReadinessError::ConfigParse(
                "quotable.max_picks must be greater than 0".to_string(),
            ));
        }

        if settings.findings.max_per_section == 0 {
            return Err(ReadinessError::ConfigParse(
                "findings.max_per_section must be greater than 0".to_string(),
            ));
        }

        let weights = settings.weights;
        if let Some((name, _)) = weights
            .values()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ReadinessError::ConfigParse(format!(
                "weights.{name} must be a non-negative number"
            )));
        }
        let cap_sum = weights.clarity_max + weights.verifiability_max + weights.structure_max;
        if cap_sum > 10.0 + f32::EPSILON {
            return Err(ReadinessError::ConfigParse(format!(
                "weights caps must sum to at most 10.0 (found {:.1})",
                cap_sum
            )));
        }

        for (name, list) in settings.keywords.lists() {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ReadinessError::ConfigParse(format!(
                    "keywords.{name} entries must be non-empty"
                )));
            }
        }

        Ok(())
    }
}
