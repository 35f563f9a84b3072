use crate::types::report::{AnalysisResult, Finding};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Provenance printed at the top of an exported report. The fingerprint
/// lets a report be matched to its draft without keeping the draft.
#[derive(Debug, Clone, Serialize)]
pub struct ExportHeader {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub fingerprint: String,
}

impl ExportHeader {
    pub fn new(text: &str) -> Self {
        Self::at(text, Utc::now())
    }

    pub fn at(text: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at,
            fingerprint: fingerprint(text),
        }
    }
}

pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.trim().as_bytes());
    let hex = digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    format!("sha256:{hex}")
}

pub fn to_text(result: &AnalysisResult, header: &ExportHeader) -> String {
    let mut output = String::new();
    output.push_str("ANSWER ENGINE READINESS REPORT\n");
    output.push_str("==============================\n");
    output.push_str(&format!("Tool version: {}\n", header.version));
    output.push_str(&format!(
        "Generated: {}\n",
        header
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    output.push_str(&format!("Input fingerprint: {}\n\n", header.fingerprint));

    output.push_str(&format!("Score: {:.1}/10\n", result.overall));
    output.push_str(&format!("Band: {}\n", result.band));
    output.push_str(&format!("{}\n", result.rationale));
    output.push_str(&format!(
        "Benchmark reference: {:.1}/10 ({})\n\n",
        result.benchmark, result.benchmark_delta
    ));

    output.push_str("Breakdown\n");
    output.push_str(&format!("  Clarity:       {:.1}\n", result.scores.clarity));
    output.push_str(&format!("  Verifiability: {:.1}\n", result.scores.verifiability));
    output.push_str(&format!("  Structure:     {:.1}\n\n", result.scores.structure));

    output.push_str("The lead (what AI grabs first)\n");
    output.push_str(&format!("  {}\n", result.lead));
    let checklist = result
        .lead_checks
        .labelled()
        .iter()
        .map(|(label, ok)| format!("[{}] {}", if *ok { "x" } else { " " }, label))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(&format!(
        "  {checklist}  ({}/6)\n\n",
        result.lead_checks.passed()
    ));

    output.push_str("Facts AI can lift cleanly\n");
    for sentence in &result.repeatables {
        output.push_str(&format!("  - {sentence}\n"));
    }
    output.push('\n');

    let stats = &result.stats;
    output.push_str("Statistics\n");
    output.push_str(&format!("  Word count: {}\n", stats.word_count));
    output.push_str(&format!("  Sentences: {}\n", stats.sentence_count));
    output.push_str(&format!("  Paragraphs: {}\n", stats.paragraph_count));
    output.push_str(&format!(
        "  Average sentence length: {} words\n",
        stats.avg_sentence_words
    ));
    output.push_str(&format!(
        "  Longest paragraph: {} words\n",
        stats.longest_paragraph_words
    ));
    output.push_str(&format!(
        "  Bullets present: {}\n",
        yes_no(stats.bullets_present)
    ));
    output.push_str(&format!(
        "  Headings/labels present: {}\n\n",
        yes_no(stats.headings_present)
    ));

    push_findings(&mut output, "Lead gaps", &result.lead_gaps);
    push_findings(&mut output, "Trust gaps", &result.trust_gaps);
    push_findings(&mut output, "Clarity gaps", &result.clarity_gaps);
    push_findings(
        &mut output,
        "What's missing for accurate recommendations",
        &result.missing,
    );

    output.push_str("Quick wins\n");
    if result.quick_wins.is_empty() {
        output.push_str("  - none\n");
    } else {
        for (index, win) in result.quick_wins.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, win.title));
            output.push_str(&format!("     {}\n", win.hint));
        }
    }

    output
}

fn push_findings(output: &mut String, title: &str, findings: &[Finding]) {
    output.push_str(title);
    output.push('\n');
    if findings.is_empty() {
        output.push_str("  No major gaps detected in this section.\n\n");
        return;
    }
    for finding in findings {
        output.push_str(&format!("  - {}\n", finding.issue));
        output.push_str(&format!("    {}\n", finding.why));
    }
    output.push('\n');
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
