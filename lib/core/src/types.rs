/// Generate a new opaque session token (UUIDv4, no dashes).
pub fn new_token() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Normalize a tag list at the API boundary: trim each entry, drop entries
/// that trim to nothing. Order is preserved and duplicates are kept.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token() {
        let token = new_token();
        assert_eq!(token.len(), 32);
        assert!(!token.contains('-'));
        assert_ne!(new_token(), token);
    }

    #[test]
    fn test_now_rfc3339() {
        let ts = now_rfc3339();
        assert!(ts.contains('T'));
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " vegan ".to_string(),
            "pizza".to_string(),
            "  ".to_string(),
            "pizza".to_string(),
        ];
        // Trimmed, order preserved, duplicates kept, blanks dropped.
        assert_eq!(normalize_tags(tags), vec!["vegan", "pizza", "pizza"]);
    }
}
