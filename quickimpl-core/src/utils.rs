//! Shared string helpers for command composition.

/// Lower-case `name` and keep at most `len` characters (e.g., ("Foo", 1) -> "f").
pub fn receiver_prefix(name: &str, len: usize) -> String {
    name.to_lowercase().chars().take(len).collect()
}

/// Join a package path and a name (e.g., (Some("io"), "Reader") -> "io.Reader").
pub fn qualified_name(container: Option<&str>, name: &str) -> String {
    match container {
        Some(container) if !container.is_empty() => format!("{}.{}", container, name),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiver_prefix() {
        assert_eq!(receiver_prefix("Foo", 1), "f");
        assert_eq!(receiver_prefix("Foo", 3), "foo");
        assert_eq!(receiver_prefix("Foo", 10), "foo");
        assert_eq!(receiver_prefix("Foo", 0), "");
        assert_eq!(receiver_prefix("", 2), "");
    }

    #[test]
    fn test_receiver_prefix_counts_chars() {
        assert_eq!(receiver_prefix("ÄpfelBaum", 2), "äp");
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name(Some("pkg"), "Reader"), "pkg.Reader");
        assert_eq!(qualified_name(Some(""), "Reader"), "Reader");
        assert_eq!(qualified_name(None, "Reader"), "Reader");
    }
}
