use std::{path::PathBuf, str::FromStr, time::Duration};

use async_trait::async_trait;
use quickimpl_config::IndexConfig;
use quickimpl_core::{Position, Range, Symbol, SymbolKind};
use tracing::trace;

use crate::{AssistError, Result, SymbolIndex, invoke::run_tool};

/// Workspace symbols from `gopls workspace_symbol <query>`.
#[derive(Debug, Clone)]
pub struct GoplsIndex {
    tool: String,
    workspace: PathBuf,
    timeout: Duration,
}

impl GoplsIndex {
    pub fn new(tool: impl Into<String>, workspace: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            tool: tool.into(),
            workspace: workspace.into(),
            timeout,
        }
    }

    pub fn from_config(config: &IndexConfig, workspace: impl Into<PathBuf>) -> Self {
        Self::new(config.tool.clone(), workspace, config.timeout())
    }
}

#[async_trait]
impl SymbolIndex for GoplsIndex {
    async fn query(&self, keyword: &str) -> Result<Vec<Symbol>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let output = run_tool(
            &self.tool,
            ["workspace_symbol", keyword],
            &self.workspace,
            self.timeout,
        )
        .await;

        if let Some(exit) = output.exit_error() {
            let message = match output.stderr() {
                Some(stderr) => format!("{}: {}", exit, stderr),
                None => exit.to_string(),
            };
            return Err(AssistError::SymbolQuery { message });
        }

        Ok(parse_workspace_symbols(output.stdout()))
    }
}

/// Parse `gopls workspace_symbol` output.
///
/// Each line reads `<file>:<line>:<col>-<col> <name> <Kind>` (or with
/// `<line>:<col>` after the dash for multi-line spans). Package-qualified
/// names such as `io.Reader` are split into container and name. Lines that
/// don't fit the shape are skipped.
pub fn parse_workspace_symbols(output: &str) -> Vec<Symbol> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Symbol> {
    let mut parts = line.trim().rsplitn(3, ' ');
    let kind = parts.next()?;
    let qualified = parts.next()?;
    let span = parts.next()?;

    let kind = SymbolKind::from_str(kind).unwrap_or(SymbolKind::Other);
    let range = parse_span(span)?;
    trace!(qualified, %kind, "workspace symbol");

    let symbol = match qualified.rsplit_once('.') {
        Some((container, name)) if !container.is_empty() && !name.is_empty() => {
            Symbol::new(name, kind, range).in_container(container)
        }
        _ => Symbol::new(qualified, kind, range),
    };
    Some(symbol)
}

/// `file:L:C-C2` or `file:L:C-L2:C2`, one-based.
fn parse_span(span: &str) -> Option<Range> {
    let (head, last) = span.rsplit_once(':')?;

    let (start_line, start_col, end_line, end_col): (usize, usize, usize, usize) =
        match last.split_once('-') {
            // file:L:C-C2
            Some((col, end_col)) => {
                let (_, line) = head.rsplit_once(':')?;
                let line = line.parse().ok()?;
                (line, col.parse().ok()?, line, end_col.parse().ok()?)
            }
            // file:L:C-L2:C2
            None => {
                let (head, middle) = head.rsplit_once(':')?;
                let (col, end_line) = middle.split_once('-')?;
                let (_, line) = head.rsplit_once(':')?;
                (
                    line.parse().ok()?,
                    col.parse().ok()?,
                    end_line.parse().ok()?,
                    last.parse().ok()?,
                )
            }
        };

    Some(Range::new(
        Position::new(start_line.checked_sub(1)?, start_col.saturating_sub(1)),
        Position::new(end_line.checked_sub(1)?, end_col.saturating_sub(1)),
    ))
}
