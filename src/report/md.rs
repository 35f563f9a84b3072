use crate::types::report::{AnalysisResult, Finding};

pub fn to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("# Readiness Report\n\n");
    output.push_str(&format!(
        "**{:.1}/10** · {}\n\n{}\n\nBenchmark reference: {:.1}/10 ({})\n\n",
        result.overall, result.band, result.rationale, result.benchmark, result.benchmark_delta
    ));

    output.push_str("## Score Breakdown\n\n");
    output.push_str(&format!(
        "- clarity: {:.1}\n- verifiability: {:.1}\n- structure: {:.1}\n\n",
        result.scores.clarity, result.scores.verifiability, result.scores.structure
    ));

    output.push_str("## The Lead\n\n");
    output.push_str(&format!("> {}\n\n", result.lead));
    for (label, ok) in result.lead_checks.labelled() {
        output.push_str(&format!("- [{}] {}\n", if ok { "x" } else { " " }, label));
    }
    output.push('\n');
    push_findings(&mut output, &result.lead_gaps);

    output.push_str("## Trust Signals\n\n");
    for sentence in &result.repeatables {
        output.push_str(&format!("- {sentence}\n"));
    }
    output.push('\n');
    push_findings(&mut output, &result.trust_gaps);

    output.push_str("## Clarity\n\n");
    let stats = &result.stats;
    output.push_str(&format!(
        "- word count: {}\n- average sentence length: {} words\n- longest paragraph: {} words\n- bullets present: {}\n- headings present: {}\n\n",
        stats.word_count,
        stats.avg_sentence_words,
        stats.longest_paragraph_words,
        stats.bullets_present,
        stats.headings_present
    ));
    push_findings(&mut output, &result.clarity_gaps);

    output.push_str("## What's Missing\n\n");
    push_findings(&mut output, &result.missing);

    output.push_str("## Quick Wins\n\n");
    if result.quick_wins.is_empty() {
        output.push_str("- none\n");
    } else {
        for win in &result.quick_wins {
            output.push_str(&format!("- **{}**: {}\n", win.title, win.hint));
        }
    }

    output
}

fn push_findings(output: &mut String, findings: &[Finding]) {
    if findings.is_empty() {
        output.push_str("No major gaps detected in this section.\n\n");
        return;
    }
    for finding in findings {
        output.push_str(&format!("- **{}** {}\n", finding.issue, finding.why));
    }
    output.push('\n');
}
