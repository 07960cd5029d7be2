//! Interface lookup on top of a [`SymbolIndex`].

use std::sync::Arc;

use indexmap::IndexSet;
use quickimpl_core::{InterfaceCandidate, SymbolKind};
use tracing::debug;

use crate::{Result, SymbolIndex};

/// Turns keyword queries into interface candidates.
pub struct QueryClient<I: ?Sized> {
    index: Arc<I>,
}

impl<I: ?Sized> Clone for QueryClient<I> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl<I: SymbolIndex + ?Sized> QueryClient<I> {
    pub fn new(index: Arc<I>) -> Self {
        Self { index }
    }

    /// Interfaces matching `keyword`, in index order.
    ///
    /// Non-interface symbols are dropped, and so are repeats of an already
    /// listed qualified name.
    ///
    /// # Errors
    ///
    /// Propagates a failed index query unchanged.
    pub async fn query_interfaces(&self, keyword: &str) -> Result<Vec<InterfaceCandidate>> {
        let symbols = self.index.query(keyword).await?;
        let total = symbols.len();

        let candidates: IndexSet<InterfaceCandidate> = symbols
            .iter()
            .filter(|symbol| symbol.kind == SymbolKind::Interface)
            .map(InterfaceCandidate::from)
            .collect();

        debug!(
            keyword,
            symbols = total,
            interfaces = candidates.len(),
            "symbol query finished"
        );
        Ok(candidates.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use quickimpl_core::{Range, Symbol};

    use super::*;
    use crate::{
        AssistError,
        testing::{FailingSymbolIndex, StaticSymbolIndex},
    };

    fn index() -> Arc<StaticSymbolIndex> {
        Arc::new(StaticSymbolIndex::new(vec![
            Symbol::new("Reader", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("ReadAll", SymbolKind::Function, Range::default()).in_container("io"),
            Symbol::new("Reader", SymbolKind::Struct, Range::default()).in_container("bufio"),
            Symbol::new("ReadCloser", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("Reader", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("Reader", SymbolKind::Interface, Range::default()),
        ]))
    }

    #[tokio::test]
    async fn test_keeps_only_interfaces() {
        let client = QueryClient::new(index());
        let names: Vec<String> = client
            .query_interfaces("Read")
            .await
            .unwrap()
            .iter()
            .map(InterfaceCandidate::qualified_name)
            .collect();

        assert_eq!(names, vec!["io.Reader", "io.ReadCloser", "Reader"]);
    }

    #[tokio::test]
    async fn test_passes_keyword_through() {
        let index = index();
        let client = QueryClient::new(Arc::clone(&index));
        client.query_interfaces("Closer").await.unwrap();
        assert_eq!(index.queries(), vec!["Closer"]);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let client = QueryClient::new(index());
        assert!(client.query_interfaces("Marshal").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let client = QueryClient::new(Arc::new(FailingSymbolIndex::new("gopls crashed")));
        let err = client.query_interfaces("Read").await.unwrap_err();
        assert!(matches!(err, AssistError::SymbolQuery { .. }));
    }
}
