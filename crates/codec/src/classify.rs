use serde::{Deserialize, Serialize};

/// Which way an input should be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plain text to codes.
    Encode,
    /// Codes to plain text.
    Decode,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Decides the conversion direction of unlabeled input.
///
/// `None` means the input gives nothing to go on (it is blank).
pub trait Classifier: Send + Sync {
    fn classify(&self, input: &str) -> Option<Direction>;
}

/// Character-set heuristic.
///
/// Input made only of marks (`.` `-`), spaces, `/`, tabs and line breaks,
/// with at least one mark, is treated as code. Anything else is text. This
/// does not check that the codes are well formed; malformed code still goes
/// to the decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkClassifier;

impl Classifier for MarkClassifier {
    fn classify(&self, input: &str) -> Option<Direction> {
        classify(input)
    }
}

/// Classify `input` with [`MarkClassifier`] rules.
pub fn classify(input: &str) -> Option<Direction> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let code_like = trimmed
        .chars()
        .all(|c| matches!(c, '.' | '-' | ' ' | '/' | '\n' | '\r' | '\t'));

    if code_like && trimmed.contains(|c: char| c == '.' || c == '-') {
        Some(Direction::Decode)
    } else {
        Some(Direction::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors() {
        assert_eq!(classify("... --- ..."), Some(Direction::Decode));
        assert_eq!(classify("SOS"), Some(Direction::Encode));
    }

    #[test]
    fn test_blank_is_ambiguous() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("\n\t\r "), None);
    }

    #[test]
    fn test_code_with_layout_characters() {
        assert_eq!(classify("  .- / -...\r\n--\t.  "), Some(Direction::Decode));
        assert_eq!(classify("-"), Some(Direction::Decode));
    }

    #[test]
    fn test_separators_without_marks_are_text() {
        assert_eq!(classify("/"), Some(Direction::Encode));
        assert_eq!(classify(" / / "), Some(Direction::Encode));
    }

    #[test]
    fn test_any_other_character_forces_encode() {
        assert_eq!(classify("... --- ...x"), Some(Direction::Encode));
        assert_eq!(classify(".-_-"), Some(Direction::Encode));
        assert_eq!(classify("... \u{a0}---"), Some(Direction::Encode));
        assert_eq!(classify("1"), Some(Direction::Encode));
    }

    #[test]
    fn test_malformed_code_still_decodes() {
        assert_eq!(classify("........ ---------"), Some(Direction::Decode));
    }

    #[test]
    fn test_trait_object() {
        let classifier: Box<dyn Classifier> = Box::new(MarkClassifier);
        assert_eq!(classifier.classify(".-"), Some(Direction::Decode));
        assert_eq!(classifier.classify("A"), Some(Direction::Encode));
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Encode.to_string(), "encode");
        assert_eq!(Direction::Decode.to_string(), "decode");
    }
}
