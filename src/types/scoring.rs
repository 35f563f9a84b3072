use serde::Serialize;

pub type Score = f32;

pub const MAX_SCORE: Score = 10.0;

/// Rounds to one decimal place.
pub fn round1(value: Score) -> Score {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
    pub clarity: Score,
    pub verifiability: Score,
    pub structure: Score,
    pub overall: Score,
}

impl ScoreCard {
    pub fn new(clarity: Score, verifiability: Score, structure: Score) -> Self {
        let overall = round1(clarity + verifiability + structure).clamp(0.0, MAX_SCORE);
        Self {
            clarity,
            verifiability,
            structure,
            overall,
        }
    }

    pub fn band(&self) -> Band {
        Band::from_score(self.overall)
    }

    /// Signed distance to the benchmark, e.g. `+0.8`, `-1.2` or `+0`.
    pub fn benchmark_delta(&self, benchmark: Score) -> String {
        let delta = round1(self.overall - benchmark);
        // avoid rendering "-0"
        let delta = if delta == 0.0 { 0.0 } else { delta };
        if delta >= 0.0 {
            format!("+{delta}")
        } else {
            format!("{delta}")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Band {
    #[serde(rename = "Hard to Extract")]
    HardToExtract,
    #[serde(rename = "Extractable with Gaps")]
    ExtractableWithGaps,
    #[serde(rename = "Strong Foundation")]
    StrongFoundation,
    #[serde(rename = "Recommendation-Ready")]
    RecommendationReady,
}

impl Band {
    pub fn from_score(score: Score) -> Self {
        if score <= 3.0 {
            Self::HardToExtract
        } else if score <= 6.0 {
            Self::ExtractableWithGaps
        } else if score <= 8.0 {
            Self::StrongFoundation
        } else {
            Self::RecommendationReady
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HardToExtract => "Hard to Extract",
            Self::ExtractableWithGaps => "Extractable with Gaps",
            Self::StrongFoundation => "Strong Foundation",
            Self::RecommendationReady => "Recommendation-Ready",
        }
    }

    pub fn rationale(self) -> &'static str {
        match self {
            Self::HardToExtract => {
                "AI would struggle to summarise this accurately because the essential facts aren't clear or checkable early on."
            }
            Self::ExtractableWithGaps => {
                "AI can summarise parts of this, but some key details are missing or easy to blur into generic language."
            }
            Self::StrongFoundation => {
                "AI can reuse several details confidently, but a few gaps may cause it to generalise or drop specifics."
            }
            Self::RecommendationReady => {
                "This contains clear, reusable facts. AI is more likely to repeat the key details accurately."
            }
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
