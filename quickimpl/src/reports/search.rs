//! Search command report data structures.

use quickimpl_core::InterfaceCandidate;

use super::output::{Output, Report};

/// Interfaces found for a keyword.
#[derive(Debug)]
pub struct SearchReport {
    pub keyword: String,
    pub candidates: Vec<InterfaceCandidate>,
}

impl Report for SearchReport {
    fn render(&self, out: &mut dyn Output) {
        if self.candidates.is_empty() {
            out.preformatted(&format!("No interfaces match '{}'", self.keyword));
            return;
        }

        out.section(&format!("Interfaces matching '{}'", self.keyword));
        for (i, candidate) in self.candidates.iter().enumerate() {
            out.numbered_item(i + 1, &candidate.qualified_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_candidates() {
        let report = SearchReport {
            keyword: "Read".to_string(),
            candidates: vec![
                InterfaceCandidate::new("Reader").in_package("io"),
                InterfaceCandidate::new("ReadSeeker").in_package("io"),
                InterfaceCandidate::new("Reader"),
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Interfaces matching 'Read':",
                "  1. io.Reader",
                "  2. io.ReadSeeker",
                "  3. Reader",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let report = SearchReport {
            keyword: "Marshal".to_string(),
            candidates: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["No interfaces match 'Marshal'"]);
    }
}
