//! Implement command report data structures.

use std::path::PathBuf;

use quickimpl_assist::Insertion;

use super::output::{Output, Report};

/// Stubs inserted into a file.
#[derive(Debug)]
pub struct ImplementReport {
    pub file: PathBuf,
    pub struct_name: String,
    pub insertion: Insertion,
    /// Whether the edit was printed instead of written.
    pub dry_run: bool,
}

impl ImplementReport {
    /// Signatures of the generated methods.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.insertion
            .text
            .lines()
            .filter(|line| line.starts_with("func "))
            .map(|line| line.trim_end_matches('{').trim_end())
    }
}

impl Report for ImplementReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("struct", &self.struct_name);
        out.section("Methods");
        for method in self.methods() {
            out.added_item(method);
        }

        let line = self.insertion.line + 1;
        if self.dry_run {
            out.preformatted(&format!(
                "Dry run: {} was not written (stubs go at line {})",
                self.file.display(),
                line
            ));
        } else {
            out.preformatted(&format!(
                "✓ Inserted stubs at {}:{}",
                self.file.display(),
                line
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(dry_run: bool) -> ImplementReport {
        ImplementReport {
            file: PathBuf::from("store/foo.go"),
            struct_name: "Foo".to_string(),
            insertion: Insertion {
                line: 5,
                text: "\nfunc (f *Foo) Read(p []byte) (n int, err error) {\n\
                       \tpanic(\"not implemented\")\n}\n\n\
                       func (f *Foo) Close() error {\n\tpanic(\"not implemented\")\n}\n"
                    .to_string(),
            },
            dry_run,
        }
    }

    #[test]
    fn test_methods() {
        let report = report(false);
        let methods: Vec<&str> = report.methods().collect();
        assert_eq!(
            methods,
            vec![
                "func (f *Foo) Read(p []byte) (n int, err error)",
                "func (f *Foo) Close() error"
            ]
        );
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(false).render(&mut out);

        assert_eq!(out.lines[0], "struct: Foo");
        assert_eq!(out.lines.last().unwrap(), "✓ Inserted stubs at store/foo.go:6");
    }

    #[test]
    fn test_render_dry_run() {
        let mut out = BufferOutput::default();
        report(true).render(&mut out);

        assert!(out.lines.last().unwrap().starts_with("Dry run: store/foo.go was not written"));
    }
}
