use crate::error::{ReadinessError, Result};
use crate::types::config::{InputLimits, Oversize};
use std::io::Read;
use std::path::Path;

/// Where the copy comes from.
#[derive(Debug, Clone)]
pub enum Source<'a> {
    Inline(&'a str),
    File(&'a Path),
    Stdin,
}

impl<'a> Source<'a> {
    pub fn resolve(path: Option<&'a Path>, inline: Option<&'a str>) -> Self {
        match (inline, path) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "inline text".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }
}

pub fn read_source(source: &Source<'_>, limits: &InputLimits) -> Result<String> {
    let raw = match source {
        Source::Inline(text) => text.to_string(),
        Source::File(path) => {
            if !path.exists() {
                return Err(ReadinessError::InputNotFound(path.display().to_string()));
            }
            std::fs::read_to_string(path)?
        }
        Source::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    enforce_limit(raw, limits)
}

pub fn enforce_limit(text: String, limits: &InputLimits) -> Result<String> {
    let actual = text.chars().count();
    if actual <= limits.max_input_chars {
        return Ok(text);
    }
    match limits.on_oversize {
        Oversize::Reject => Err(ReadinessError::InputTooLarge {
            actual,
            limit: limits.max_input_chars,
        }),
        Oversize::Truncate => {
            tracing::warn!(
                actual,
                limit = limits.max_input_chars,
                "input truncated to character limit"
            );
            Ok(text.chars().take(limits.max_input_chars).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn inline_text_wins_over_path() {
        let path = Path::new("copy.txt");
        assert!(matches!(
            Source::resolve(Some(path), Some("hello")),
            Source::Inline("hello")
        ));
        assert!(matches!(Source::resolve(Some(path), None), Source::File(_)));
        assert!(matches!(
            Source::resolve(Some(Path::new("-")), None),
            Source::Stdin
        ));
        assert!(matches!(Source::resolve(None, None), Source::Stdin));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("absent.txt");
        let err = read_source(&Source::File(&path), &InputLimits::default())
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("input not found"));
    }

    #[test]
    fn file_contents_are_read() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("copy.txt");
        fs::write(&path, "A villa in Ibiza.").expect("copy should write");
        let text = read_source(&Source::File(&path), &InputLimits::default())
            .expect("read should succeed");
        assert_eq!(text, "A villa in Ibiza.");
    }

    #[test]
    fn oversize_input_is_rejected_by_default() {
        let limits = InputLimits {
            max_input_chars: 5,
            ..InputLimits::default()
        };
        let err = enforce_limit("abcdefgh".to_string(), &limits).expect_err("should reject");
        assert!(matches!(
            err,
            ReadinessError::InputTooLarge {
                actual: 8,
                limit: 5
            }
        ));
    }

    #[test]
    fn oversize_input_can_be_truncated_on_char_boundary() {
        let limits = InputLimits {
            max_input_chars: 3,
            on_oversize: Oversize::Truncate,
        };
        let text = enforce_limit("€€€€".to_string(), &limits).expect("should truncate");
        assert_eq!(text, "€€€");
        let text = enforce_limit("ab".to_string(), &limits).expect("within limit");
        assert_eq!(text, "ab");
    }
}
