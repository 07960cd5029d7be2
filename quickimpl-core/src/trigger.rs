//! Detection of struct declarations on a single line.

/// Keyword whose presence on a line offers the quick fix.
pub const STRUCT_KEYWORD: &str = "struct";

/// Whether the "Implement Interface Methods" action should be offered for `line`.
pub fn should_offer(line: &str) -> bool {
    line.contains(STRUCT_KEYWORD)
}

/// A line that declares a struct, with the name taken from its second token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    line_text: String,
    detected_struct_name: String,
}

impl TriggerContext {
    /// Inspect `line`, returning a context only when the quick fix applies.
    ///
    /// The struct name is the second whitespace-delimited token, so
    /// `type Foo struct {` yields `Foo`. A line without a second token still
    /// produces a context, with an empty name.
    pub fn detect(line: &str) -> Option<Self> {
        if !should_offer(line) {
            return None;
        }

        let detected_struct_name = line
            .split_whitespace()
            .nth(1)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            line_text: line.to_string(),
            detected_struct_name,
        })
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn struct_name(&self) -> &str {
        &self.detected_struct_name
    }

    /// Returns true when a usable struct name was found.
    pub fn has_struct_name(&self) -> bool {
        !self.detected_struct_name.is_empty()
    }
}
