use crate::scan::signals::LeadChecks;
use crate::types::scoring::{Band, Score, ScoreCard};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Lead,
    Trust,
    Clarity,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Self::Lead => "The Lead",
            Self::Trust => "Trust signals",
            Self::Clarity => "Clarity",
        }
    }
}

/// A detected gap: what is missing and how a summariser tends to mishandle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub section: Section,
    pub issue: String,
    pub why: String,
}

/// The actionable phrasing of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickWin {
    pub id: String,
    pub title: String,
    pub hint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_sentence_words: Score,
    pub longest_paragraph_words: usize,
    pub bullets_present: bool,
    pub headings_present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall: Score,
    pub band: Band,
    pub rationale: String,
    pub benchmark: Score,
    pub benchmark_delta: String,
    pub scores: ScoreCard,
    pub lead: String,
    pub lead_checks: LeadChecks,
    pub repeatables: Vec<String>,
    pub lead_gaps: Vec<Finding>,
    pub trust_gaps: Vec<Finding>,
    pub clarity_gaps: Vec<Finding>,
    pub missing: Vec<Finding>,
    pub quick_wins: Vec<QuickWin>,
    pub stats: TextStats,
}

impl AnalysisResult {
    pub fn gap_count(&self) -> usize {
        self.lead_gaps.len() + self.trust_gaps.len() + self.clarity_gaps.len()
    }

    #[cfg(test)]
    pub fn has_finding(&self, id: &str) -> bool {
        self.lead_gaps
            .iter()
            .chain(&self.trust_gaps)
            .chain(&self.clarity_gaps)
            .any(|finding| finding.id == id)
    }
}
