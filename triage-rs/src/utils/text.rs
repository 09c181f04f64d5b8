//! Text normalization helpers

/// Normalize free-form text for keyword matching: lower-case and collapse
/// all runs of whitespace into single spaces.
///
/// Multi-word terms like "guinea pig" rely on the collapsing so that line
/// breaks inside an email never hide a match.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_text("Foster A Dog"), "foster a dog");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("guinea\n\t  pig"), "guinea pig");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_text("  hello  "), "hello");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \n\t "), "");
    }
}
