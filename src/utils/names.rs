//! Plant name handling utility
//!
//! Catalog keys are plant common names as typed by people, so the same plant
//! arrives as "Tomato", "tomato " or "TOMATO". Everything that compares or
//! indexes names goes through here:
//! 1. `catalog_key` - trimmed, ASCII-lowercased lookup key
//! 2. `names_match` - key equality without allocating
//! 3. `split_name_list` - pipe/semicolon separated companion lists
//! 4. `display_name` - "bush bean" → "Bush Bean" for messages

/// Normalised lookup key for a plant common name
pub fn catalog_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Compare two plant names by catalog key
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Parse a pipe-separated or semicolon-separated name list
///
/// Keeps source order (companion lists are displayed as authored).
/// Blank entries are dropped.
pub fn split_name_list(raw: &str) -> Vec<String> {
    let separators = ['|', ';'];
    raw.split(|c| separators.contains(&c))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Title-case a plant name for display
///
/// Returns: "Bush Bean" for "bush bean", unchanged words keep their tail
/// ("pak CHOI" → "Pak CHOI").
pub fn display_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_key() {
        assert_eq!(catalog_key("  Tomato "), "tomato");
        assert_eq!(catalog_key("Bush Bean"), "bush bean");
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Basil", " basil"));
        assert!(!names_match("Basil", "Thai basil"));
    }

    #[test]
    fn test_split_name_list() {
        assert_eq!(
            split_name_list("basil|carrot | onion"),
            vec!["basil".to_string(), "carrot".to_string(), "onion".to_string()]
        );
        assert_eq!(
            split_name_list("dill; fennel"),
            vec!["dill".to_string(), "fennel".to_string()]
        );
        assert!(split_name_list("").is_empty());
        assert!(split_name_list(" | ; ").is_empty());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("bush bean"), "Bush Bean");
        assert_eq!(display_name("tomato"), "Tomato");
        assert_eq!(display_name("  pak   choi "), "Pak Choi");
        assert_eq!(display_name(""), "");
    }
}
