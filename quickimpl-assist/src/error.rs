use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistError>;

/// Failures of one quick-fix invocation.
///
/// Every variant is terminal for the invocation that raised it; none of them
/// leaves a partial edit behind.
#[derive(Debug, Error, Diagnostic)]
pub enum AssistError {
    #[error("line {line} is outside the document")]
    #[diagnostic(code(quickimpl::line_out_of_range))]
    LineOutOfRange { line: usize },

    #[error("no struct declaration on line {line}")]
    #[diagnostic(
        code(quickimpl::no_struct),
        help("put the cursor on a line such as `type Server struct`")
    )]
    NoStructAtLine { line: usize },

    #[error("no struct name found in `{line_text}`")]
    #[diagnostic(
        code(quickimpl::missing_struct_name),
        help("the struct name must be the second word on the line")
    )]
    MissingStructName { line_text: String },

    #[error("struct '{name}' not found in {}", .path.display())]
    #[diagnostic(
        code(quickimpl::struct_not_found),
        help("save the file so its declarations can be located")
    )]
    StructNotFound { name: String, path: PathBuf },

    #[error("symbol query failed: {message}")]
    #[diagnostic(code(quickimpl::symbol_query))]
    SymbolQuery { message: String },

    #[error("{message}")]
    #[diagnostic(code(quickimpl::generator))]
    Generator { message: String },

    #[error("failed to edit document: {message}")]
    #[diagnostic(code(quickimpl::document))]
    Document { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AssistError::StructNotFound {
            name: "Foo".to_string(),
            path: PathBuf::from("shapes/foo.go"),
        };
        assert_eq!(err.to_string(), "struct 'Foo' not found in shapes/foo.go");

        let err = AssistError::Generator {
            message: "impl exited with exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "impl exited with exit status: 1");
    }
}
