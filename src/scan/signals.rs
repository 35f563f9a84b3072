use crate::types::config::Keywords;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit regex should compile"));

static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[€$£]\s?[0-9]").expect("currency regex should compile"));

static YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(?:19|20)[0-9]{2}(?-u:\b)").expect("year regex should compile")
});

static MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?-u:\b)(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)(?-u:\b)",
    )
    .expect("month regex should compile")
});

// Two or more Capitalised words in a row, e.g. "Son Bunyola".
// Word boundaries are ASCII-only so accented letters act as separators.
static PROPER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+(?-u:\b)")
        .expect("proper name regex should compile")
});

static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\n)\s*[-•]").expect("bullet regex should compile"));

/// The detector table: fixed patterns plus keyword lists compiled from
/// [`Keywords`]. Every predicate is total over arbitrary input.
#[derive(Debug, Clone)]
pub struct Detectors {
    keywords: Keywords,
    heading_line: Option<Regex>,
}

impl Default for Detectors {
    fn default() -> Self {
        Self::new(&Keywords::default())
    }
}

impl Detectors {
    pub fn new(keywords: &Keywords) -> Self {
        Self {
            keywords: keywords.clone(),
            heading_line: compile_heading_regex(&keywords.headings),
        }
    }

    pub fn has_number(&self, text: &str) -> bool {
        DIGIT.is_match(text)
    }

    pub fn has_currency(&self, text: &str) -> bool {
        CURRENCY.is_match(text)
    }

    pub fn has_year(&self, text: &str) -> bool {
        YEAR.is_match(text)
    }

    pub fn has_month(&self, text: &str) -> bool {
        MONTH.is_match(text)
    }

    pub fn has_date(&self, text: &str) -> bool {
        self.has_year(text) || self.has_month(text)
    }

    pub fn has_facts(&self, text: &str) -> bool {
        self.has_number(text) || self.has_currency(text)
    }

    pub fn has_location(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.locations)
    }

    pub fn has_category(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.categories)
    }

    pub fn has_best_for(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.best_for)
    }

    pub fn has_who(&self, text: &str) -> bool {
        PROPER_NAME.is_match(text)
    }

    pub fn has_why(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.why)
    }

    pub fn has_so_what(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.so_what)
    }

    pub fn has_cta(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.cta)
    }

    pub fn has_superlative(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.superlatives)
    }

    pub fn has_availability(&self, text: &str) -> bool {
        contains_any(text, &self.keywords.availability)
    }

    pub fn has_bullets(&self, text: &str) -> bool {
        BULLET_LINE.is_match(text)
    }

    pub fn has_headings(&self, text: &str) -> bool {
        self.heading_line
            .as_ref()
            .map(|regex| regex.is_match(text))
            .unwrap_or(false)
    }

    pub fn lead_checks(&self, lead: &str) -> LeadChecks {
        LeadChecks {
            who: self.has_who(lead),
            what: self.has_category(lead),
            r#where: self.has_location(lead),
            when: self.has_date(lead),
            why: self.has_why(lead),
            so_what: self.has_so_what(lead),
        }
    }
}

/// The six questions a summariser tries to answer from the opening words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadChecks {
    pub who: bool,
    pub what: bool,
    #[serde(rename = "where")]
    pub r#where: bool,
    pub when: bool,
    pub why: bool,
    pub so_what: bool,
}

impl LeadChecks {
    pub fn labelled(&self) -> [(&'static str, bool); 6] {
        [
            ("Who", self.who),
            ("What", self.what),
            ("Where", self.r#where),
            ("When", self.when),
            ("Why", self.why),
            ("So what", self.so_what),
        ]
    }

    pub fn passed(&self) -> usize {
        self.labelled().iter().filter(|(_, ok)| *ok).count()
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle.as_str()))
}

fn compile_heading_regex(labels: &[String]) -> Option<Regex> {
    if labels.is_empty() {
        return None;
    }
    let alternation = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)(?:^|\n)\s*(?:{alternation})\s*[:\-]");
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(error = %err, "heading labels did not compile; heading detection disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detectors() -> Detectors {
        Detectors::default()
    }

    #[test]
    fn numeric_signals() {
        let d = detectors();
        assert!(d.has_number("23 suites"));
        assert!(!d.has_number("twenty suites"));
        assert!(d.has_currency("from €450"));
        assert!(d.has_currency("from $ 99"));
        assert!(d.has_currency("£1"));
        assert!(!d.has_currency("from 450 EUR"));
        assert!(d.has_facts("from €450"));
    }

    #[test]
    fn date_signals() {
        let d = detectors();
        assert!(d.has_year("opening in 2026"));
        assert!(d.has_year("since 1998."));
        assert!(!d.has_year("room 20265"));
        assert!(!d.has_year("3026"));
        assert!(d.has_year("é2026"));
        assert!(d.has_year("2026é"));
        assert!(d.has_month("àJune"));
        assert!(d.has_month("opens in June"));
        assert!(d.has_month("from SEPT onwards"));
        assert!(d.has_month("opening March 2026"));
        assert!(!d.has_month("junebug"));
        assert!(d.has_date("Dec"));
        assert!(!d.has_date("soon"));
    }

    #[test]
    fn location_requires_bounded_prepositions() {
        let d = detectors();
        assert!(d.has_location("a hotel in Mallorca"));
        assert!(d.has_location("Based in Lisbon"));
        assert!(d.has_location("right ON the beach"));
        assert!(!d.has_location("inside information"));
        assert!(!d.has_location("In Mallorca"));
    }

    #[test]
    fn keyword_signals_are_case_insensitive() {
        let d = detectors();
        assert!(d.has_category("A new RESORT"));
        assert!(d.has_category("our private island"));
        assert!(d.has_best_for("Ideal for couples"));
        assert!(d.has_why("opening because demand grew"));
        assert!(d.has_so_what("which means earlier check-in"));
        assert!(d.has_cta("Enquire today"));
        assert!(d.has_superlative("the world's most ICONIC escape"));
        assert!(d.has_availability("Subject to availability"));
        assert!(!d.has_category("a new restaurant"));
    }

    #[test]
    fn who_needs_two_capitalised_words() {
        let d = detectors();
        assert!(d.has_who("Son Bunyola is open"));
        assert!(d.has_who("from Virgin Limited Edition"));
        assert!(!d.has_who("This is a hotel"));
        assert!(!d.has_who("SON BUNYOLA"));
        assert!(d.has_who("éSon Bunyola"));
    }

    #[test]
    fn structure_detects_bullets_and_labels() {
        let d = detectors();
        assert!(d.has_bullets("- 23 suites"));
        assert!(d.has_bullets("Intro\n  • pool"));
        assert!(!d.has_bullets("a well-known place"));
        assert!(d.has_headings("Key facts: 23 suites"));
        assert!(d.has_headings("Intro\nHIGHLIGHTS - spa"));
        assert!(!d.has_headings("The highlights include a spa"));
    }

    #[test]
    fn custom_keywords_replace_defaults() {
        let keywords = Keywords {
            categories: vec!["chalet".to_string()],
            headings: vec!["fast facts".to_string()],
            ..Keywords::default()
        };
        let d = Detectors::new(&keywords);
        assert!(d.has_category("A ski Chalet"));
        assert!(!d.has_category("A hotel"));
        assert!(d.has_headings("Fast facts: open all year"));
        assert!(!d.has_headings("Key facts: open all year"));
    }

    #[test]
    fn empty_heading_list_never_matches() {
        let keywords = Keywords {
            headings: Vec::new(),
            ..Keywords::default()
        };
        let d = Detectors::new(&keywords);
        assert!(!d.has_headings("Key facts: x"));
    }

    #[test]
    fn detectors_are_total_over_odd_input() {
        let d = detectors();
        for text in ["", "\u{0}", "€", "🏝️🏝️", "\n\n\n", "ÀÉÎ õü"] {
            let _ = d.has_bullets(text) || d.has_headings(text);
            let _ = d.lead_checks(text);
            assert!(!d.has_currency(text));
        }
    }

    #[test]
    fn lead_checks_cover_all_six_questions() {
        let d = detectors();
        let checks = d.lead_checks(
            "Son Bunyola, a hotel in Mallorca, opens in June 2026 to meet demand, which means more rooms.",
        );
        assert_eq!(checks.passed(), 6);
        assert_eq!(checks.labelled()[5], ("So what", true));
    }
}
