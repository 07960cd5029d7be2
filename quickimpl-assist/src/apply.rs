//! Splicing generated stubs into the document.

use tracing::debug;

use crate::{AssistError, DocumentModel, Result};

/// An edit made by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Zero-based line the text was inserted at
    pub line: usize,
    pub text: String,
}

/// Insert `generated` on the line after the declaration of `struct_name`.
///
/// The struct is looked up through the document's own symbols, and the first
/// symbol with exactly that name wins. The text is preceded by a blank line.
///
/// # Errors
///
/// Returns [`AssistError::StructNotFound`] without editing the document when
/// no symbol has that name.
pub async fn apply<D>(document: &mut D, struct_name: &str, generated: &str) -> Result<Insertion>
where
    D: DocumentModel + ?Sized,
{
    let symbols = document.symbols_named(struct_name).await?;
    let Some(target) = symbols.iter().find(|symbol| symbol.name == struct_name) else {
        return Err(AssistError::StructNotFound {
            name: struct_name.to_string(),
            path: document.path().to_path_buf(),
        });
    };

    let line = target.range.end.line + 1;
    let text = format!("\n{}", generated);
    document.insert_at_line(line, &text).await?;

    debug!(struct_name, line, bytes = text.len(), "inserted generated stubs");
    Ok(Insertion { line, text })
}
