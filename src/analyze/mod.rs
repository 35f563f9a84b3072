pub mod findings;
pub mod repeatables;
pub mod scoring;

use crate::scan::{self, signals::Detectors};
use crate::types::config::AnalyzerSettings;
use crate::types::report::AnalysisResult;

/// The readiness analyzer: a compiled detector table plus the weights and
/// thresholds it scores with. Analysis is pure; the same input always
/// yields the same result.
#[derive(Debug, Clone)]
pub struct Analyzer {
    settings: AnalyzerSettings,
    detectors: Detectors,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerSettings::default())
    }
}

impl Analyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        let detectors = Detectors::new(&settings.keywords);
        Self {
            settings,
            detectors,
        }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Returns `None` for empty or whitespace-only text.
    pub fn analyze(&self, text: &str) -> Option<AnalysisResult> {
        let model = scan::discover(text, self.settings.lead_words, &self.detectors)?;
        let limit = self.settings.findings.max_per_section;

        let scores = scoring::score_card(&model, &self.settings.weights);
        let band = scores.band();

        let repeatables = repeatables::extract_repeatables(
            &model.sentences,
            &self.detectors,
            &self.settings.quotable,
        );

        let lead_rules = findings::lead_rules(&model.lead_checks);
        let trust_rules = findings::trust_rules(&model);
        let clarity_rules = findings::clarity_rules(&model, &self.settings.findings);
        let action_fixes = findings::action_fixes(&model);

        let lead_gaps = findings::to_findings(&lead_rules, limit);
        let trust_gaps = findings::to_findings(&trust_rules, limit);
        let clarity_gaps = findings::to_findings(&clarity_rules, limit);
        let missing = findings::missing(
            &[
                lead_gaps.as_slice(),
                trust_gaps.as_slice(),
                clarity_gaps.as_slice(),
            ],
            limit,
        );

        let triggered = lead_rules
            .iter()
            .chain(&trust_rules)
            .chain(&clarity_rules)
            .map(|rule| rule.fix)
            .chain(action_fixes)
            .collect::<Vec<_>>();
        let quick_wins = findings::to_quick_wins(&triggered, limit);

        tracing::debug!(
            overall = scores.overall,
            band = band.label(),
            gaps = lead_gaps.len() + trust_gaps.len() + clarity_gaps.len(),
            "analysis complete"
        );

        Some(AnalysisResult {
            overall: scores.overall,
            band,
            rationale: band.rationale().to_string(),
            benchmark: self.settings.benchmark,
            benchmark_delta: scores.benchmark_delta(self.settings.benchmark),
            scores,
            stats: model.stats(),
            lead: model.lead,
            lead_checks: model.lead_checks,
            repeatables,
            lead_gaps,
            trust_gaps,
            clarity_gaps,
            missing,
            quick_wins,
        })
    }
}
