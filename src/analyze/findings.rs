use crate::scan::signals::LeadChecks;
use crate::scan::TextModel;
use crate::types::config::FindingThresholds;
use crate::types::report::{Finding, QuickWin, Section};

/// One row of the gap table. The same trigger yields a passive finding
/// (`issue`/`why`) and an actionable quick win (`fix`).
#[derive(Debug)]
pub struct Rule {
    pub id: &'static str,
    pub section: Section,
    pub issue: &'static str,
    pub why: &'static str,
    pub fix: &'static Fix,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Fix {
    pub id: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
}

impl Rule {
    pub fn finding(&self) -> Finding {
        Finding {
            id: self.id.to_string(),
            section: self.section,
            issue: self.issue.to_string(),
            why: self.why.to_string(),
        }
    }
}

impl Fix {
    pub fn quick_win(&self) -> QuickWin {
        QuickWin {
            id: self.id.to_string(),
            title: self.title.to_string(),
            hint: self.hint.to_string(),
        }
    }
}

static NAME_EARLY: Fix = Fix {
    id: "fix.name_early",
    title: "Name the property and brand in the first sentence",
    hint: "Use the full proper name (e.g. 'Son Bunyola by Virgin Limited Edition') before any scene-setting.",
};
static STATE_CATEGORY: Fix = Fix {
    id: "fix.state_category",
    title: "Say what it is in plain words",
    hint: "Include the category early: hotel, resort, villa, lodge, retreat or estate.",
};
static STATE_LOCATION: Fix = Fix {
    id: "fix.state_location",
    title: "State the location explicitly",
    hint: "Give the town and region or country, e.g. 'in Deià, Mallorca'.",
};
static ADD_DATE: Fix = Fix {
    id: "fix.add_date",
    title: "Anchor the news in time",
    hint: "Add a full date or at least month and year, e.g. 'opening March 2026'.",
};
static STATE_REASON: Fix = Fix {
    id: "fix.state_reason",
    title: "Give the reason in one clause",
    hint: "Add a 'because...' or 'to mark...' clause so the why survives summarising.",
};
static STATE_OUTCOME: Fix = Fix {
    id: "fix.state_outcome",
    title: "Spell out what changes for the guest",
    hint: "Add a 'which means...' or 'so guests can...' line with a concrete outcome.",
};
static ADD_NUMBERS: Fix = Fix {
    id: "fix.add_numbers",
    title: "Add checkable numbers",
    hint: "Room or suite count, a 'from' price, size, distances or durations.",
};
static ADD_YEAR: Fix = Fix {
    id: "fix.add_year",
    title: "Pair every month with a year",
    hint: "Write 'June 2026' instead of 'June'.",
};
static BACK_CLAIMS: Fix = Fix {
    id: "fix.back_claims",
    title: "Back prestige words with a fact or drop them",
    hint: "Replace 'iconic' or 'world-class' with the award, ranking or figure behind it.",
};
static SPLIT_PARAGRAPHS: Fix = Fix {
    id: "fix.split_paragraphs",
    title: "Break up long paragraphs",
    hint: "Keep paragraphs to one idea and move key facts into their own short paragraph.",
};
static SHORTEN_SENTENCES: Fix = Fix {
    id: "fix.shorten_sentences",
    title: "Shorten long sentences",
    hint: "Aim for one fact per sentence and under roughly 20 words.",
};
static ADD_STRUCTURE: Fix = Fix {
    id: "fix.add_structure",
    title: "Add a 'Key facts' block",
    hint: "List name, location, opening date, room count and price as bullets under a label.",
};
static ADD_CTA: Fix = Fix {
    id: "fix.add_cta",
    title: "Close with a clear next step",
    hint: "Say how to book or enquire: a website, email address or phone number.",
};

pub static LEAD_MISSING_WHO: Rule = Rule {
    id: "lead.missing_who",
    section: Section::Lead,
    issue: "The 'who' isn't clearly named early.",
    why: "If the main name isn't obvious in the first paragraph, AI may describe you in generic terms or confuse you with a similar brand.",
    fix: &NAME_EARLY,
};
pub static LEAD_MISSING_WHAT: Rule = Rule {
    id: "lead.missing_what",
    section: Section::Lead,
    issue: "It isn't obvious what the thing is (hotel / resort / villa / lodge).",
    why: "AI relies on categories to match people's questions. If the category isn't explicit, recommendations become less accurate.",
    fix: &STATE_CATEGORY,
};
pub static LEAD_MISSING_WHERE: Rule = Rule {
    id: "lead.missing_where",
    section: Section::Lead,
    issue: "The 'where' isn't clearly stated.",
    why: "Location is one of the biggest filters in travel recommendations. If it's unclear, AI often drops it or guesses.",
    fix: &STATE_LOCATION,
};
pub static LEAD_MISSING_WHEN: Rule = Rule {
    id: "lead.missing_when",
    section: Section::Lead,
    issue: "The timing isn't clear (date / month / year).",
    why: "Without timing, AI may treat the information as outdated or evergreen, which reduces trust and precision.",
    fix: &ADD_DATE,
};
pub static LEAD_MISSING_WHY: Rule = Rule {
    id: "lead.missing_why",
    section: Section::Lead,
    issue: "The 'why now?' isn't clear.",
    why: "If the reason isn't explicit, AI may remove it in summaries and the story loses urgency and specificity.",
    fix: &STATE_REASON,
};
pub static LEAD_MISSING_SO_WHAT: Rule = Rule {
    id: "lead.missing_so_what",
    section: Section::Lead,
    issue: "The 'so what?' (what changes for the guest) isn't explicit.",
    why: "When outcomes aren't stated plainly, AI fills the gap with generic benefit language, which weakens differentiation.",
    fix: &STATE_OUTCOME,
};
pub static TRUST_NO_RECENCY: Rule = Rule {
    id: "trust.no_recency",
    section: Section::Trust,
    issue: "No clear recency marker (date/month/year).",
    why: "AI repeats dated facts more confidently. Without a time anchor, it's more likely to summarise vaguely.",
    fix: &ADD_DATE,
};
pub static TRUST_NO_MEASURABLES: Rule = Rule {
    id: "trust.no_measurables",
    section: Section::Trust,
    issue: "Few measurable details (numbers, timings, size, duration, 'from' price).",
    why: "Specific numbers are 'safe' for AI to repeat. Without them, summaries become softer and less quotable.",
    fix: &ADD_NUMBERS,
};
pub static TRUST_MONTH_WITHOUT_YEAR: Rule = Rule {
    id: "trust.month_without_year",
    section: Section::Trust,
    issue: "A month/season is mentioned without a year.",
    why: "This makes summaries less reliable because AI can't tell which year the information applies to.",
    fix: &ADD_YEAR,
};
pub static TRUST_UNSUPPORTED_SUPERLATIVES: Rule = Rule {
    id: "trust.unsupported_superlatives",
    section: Section::Trust,
    issue: "Prestige words appear without something checkable next to them.",
    why: "Humans read 'iconic' and 'world-class' as tone. AI treats them like claims and may drop them or replace them with generic phrases.",
    fix: &BACK_CLAIMS,
};
pub static CLARITY_LONG_PARAGRAPHS: Rule = Rule {
    id: "clarity.long_paragraphs",
    section: Section::Clarity,
    issue: "Some paragraphs are very long.",
    why: "When facts sit inside long blocks, AI often compresses or skips details, especially in mobile-style summaries.",
    fix: &SPLIT_PARAGRAPHS,
};
pub static CLARITY_LONG_SENTENCES: Rule = Rule {
    id: "clarity.long_sentences",
    section: Section::Clarity,
    issue: "Many sentences are long.",
    why: "Long sentences increase paraphrasing. Paraphrasing is where meaning can get softened or slightly changed.",
    fix: &SHORTEN_SENTENCES,
};
pub static CLARITY_NO_SEPARATION: Rule = Rule {
    id: "clarity.no_separation",
    section: Section::Clarity,
    issue: "Key details aren't clearly separated on the page.",
    why: "AI is more accurate when it can spot distinct fact areas. Without separation, it tends to summarise more loosely.",
    fix: &ADD_STRUCTURE,
};

pub fn lead_rules(checks: &LeadChecks) -> Vec<&'static Rule> {
    let mut rules = Vec::new();
    if !checks.who {
        rules.push(&LEAD_MISSING_WHO);
    }
    if !checks.what {
        rules.push(&LEAD_MISSING_WHAT);
    }
    if !checks.r#where {
        rules.push(&LEAD_MISSING_WHERE);
    }
    if !checks.when {
        rules.push(&LEAD_MISSING_WHEN);
    }
    if !checks.why {
        rules.push(&LEAD_MISSING_WHY);
    }
    if !checks.so_what {
        rules.push(&LEAD_MISSING_SO_WHAT);
    }
    rules
}

pub fn trust_rules(model: &TextModel) -> Vec<&'static Rule> {
    let signals = &model.signals;
    let mut rules = Vec::new();
    if !signals.date() {
        rules.push(&TRUST_NO_RECENCY);
    }
    if !signals.facts() {
        rules.push(&TRUST_NO_MEASURABLES);
    }
    if signals.month && !signals.year {
        rules.push(&TRUST_MONTH_WITHOUT_YEAR);
    }
    if signals.superlative {
        rules.push(&TRUST_UNSUPPORTED_SUPERLATIVES);
    }
    rules
}

pub fn clarity_rules(model: &TextModel, thresholds: &FindingThresholds) -> Vec<&'static Rule> {
    let mut rules = Vec::new();
    if model.longest_paragraph_words >= thresholds.long_paragraph_words {
        rules.push(&CLARITY_LONG_PARAGRAPHS);
    }
    if model.avg_sentence_words >= thresholds.long_sentence_words {
        rules.push(&CLARITY_LONG_SENTENCES);
    }
    if !model.signals.structure() {
        rules.push(&CLARITY_NO_SEPARATION);
    }
    rules
}

/// Fixes suggested without a matching gap section.
pub fn action_fixes(model: &TextModel) -> Vec<&'static Fix> {
    if model.signals.cta {
        Vec::new()
    } else {
        vec![&ADD_CTA]
    }
}

pub fn to_findings(rules: &[&'static Rule], limit: usize) -> Vec<Finding> {
    rules.iter().take(limit).map(|rule| rule.finding()).collect()
}

/// One quick win per distinct fix, in trigger order.
pub fn to_quick_wins(fixes: &[&'static Fix], limit: usize) -> Vec<QuickWin> {
    let mut seen: Vec<&'static str> = Vec::new();
    let mut wins = Vec::new();
    for fix in fixes {
        if seen.contains(&fix.id) {
            continue;
        }
        seen.push(fix.id);
        wins.push(fix.quick_win());
        if wins.len() == limit {
            break;
        }
    }
    wins
}

/// Concatenates the gap sections and keeps the first `limit`.
pub fn missing(sections: &[&[Finding]], limit: usize) -> Vec<Finding> {
    sections
        .iter()
        .flat_map(|section| section.iter())
        .take(limit)
        .cloned()
        .collect()
}
