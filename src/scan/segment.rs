use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence break regex should compile"));

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line regex should compile"));

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn first_n_words(text: &str, n: usize) -> String {
    words(text).into_iter().take(n).collect::<Vec<_>>().join(" ")
}

pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = WHITESPACE_RUN.replace_all(text, " ");
    let mut sentences = Vec::new();
    let mut start = 0;
    for found in SENTENCE_BREAK.find_iter(&normalized) {
        // terminal punctuation is ASCII, so +1 stays on a char boundary
        let end = found.start() + 1;
        push_trimmed(&mut sentences, &normalized[start..end]);
        start = found.end();
    }
    push_trimmed(&mut sentences, &normalized[start..]);
    sentences
}

pub fn split_paragraphs(text: &str) -> Vec<&str> {
    BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

pub fn avg_sentence_length(text: &str) -> f32 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|sentence| words(sentence).len()).sum();
    total as f32 / sentences.len() as f32
}

pub fn longest_paragraph_words(text: &str) -> usize {
    split_paragraphs(text)
        .into_iter()
        .map(|paragraph| words(paragraph).len())
        .max()
        .unwrap_or(0)
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_empty_segments() {
        assert!(words("").is_empty());
        assert!(words("   \n\t ").is_empty());
        assert_eq!(first_n_words("", 5), "");
        assert!(split_sentences("").is_empty());
        assert!(split_paragraphs("\n\n  \n").is_empty());
        assert_eq!(avg_sentence_length(""), 0.0);
        assert_eq!(longest_paragraph_words(""), 0);
    }

    #[test]
    fn first_n_words_rejoins_with_single_spaces() {
        let text = "Son   Bunyola\nis a\t\tboutique hotel";
        assert_eq!(first_n_words(text, 3), "Son Bunyola is");
        assert_eq!(first_n_words(text, 50), "Son Bunyola is a boutique hotel");
    }

    #[test]
    fn sentences_split_after_terminal_punctuation() {
        let sentences = split_sentences("Opening soon!  Book now.\nWhy wait? Rates from 2.5k");
        assert_eq!(
            sentences,
            vec!["Opening soon!", "Book now.", "Why wait?", "Rates from 2.5k"]
        );
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let sentences = split_sentences("Rooms from €4.50 at no. 1 street.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Rooms from €4.50 at no.");
        assert_eq!(sentences[1], "1 street.");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First para\nstill first.\n\n  \nSecond one.\n\nThird";
        let paragraphs = split_paragraphs(text);
        assert_eq!(
            paragraphs,
            vec!["First para\nstill first.", "Second one.", "Third"]
        );
        assert_eq!(longest_paragraph_words(text), 4);
    }

    #[test]
    fn average_sentence_length_counts_words_per_sentence() {
        let avg = avg_sentence_length("One two three. Four five six seven eight.");
        assert!((avg - 4.0).abs() < f32::EPSILON);
    }
}
