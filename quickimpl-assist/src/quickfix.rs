//! The quick fix offered on struct declarations.

use std::{fmt, sync::Arc};

use quickimpl_config::Config;
use quickimpl_core::{InterfaceCandidate, Range, TriggerContext, should_offer};
use tracing::{debug, info, warn};

use crate::{
    AssistError, DocumentModel, GeneratorInvoker, Insertion, Notifier, PromptHandle,
    PromptOutcome, QueryClient, Result, SelectionPrompt, SymbolIndex, apply, compose,
};

pub const IMPLEMENT_ACTION_TITLE: &str = "Implement Interface Methods";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeActionKind {
    QuickFix,
}

impl CodeActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeActionKind::QuickFix => "quickfix",
        }
    }
}

impl fmt::Display for CodeActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action offered for one document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAction {
    pub title: String,
    pub kind: CodeActionKind,
    /// Zero-based line the action was offered on
    pub line: usize,
    pub trigger: TriggerContext,
}

/// Offers and runs "Implement Interface Methods".
///
/// One provider serves any number of invocations; each invocation gets a
/// fresh [`SelectionPrompt`] and shares nothing with the others.
pub struct ImplementInterfaceProvider<I: ?Sized> {
    client: QueryClient<I>,
    config: Config,
    invoker: GeneratorInvoker,
    notifier: Arc<dyn Notifier>,
}

impl<I: SymbolIndex + ?Sized + 'static> ImplementInterfaceProvider<I> {
    pub fn new(index: Arc<I>, config: Config, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: QueryClient::new(index),
            invoker: GeneratorInvoker::from_config(&config.generator),
            config,
            notifier,
        }
    }

    /// Replace the generator built from the config.
    pub fn with_invoker(mut self, invoker: GeneratorInvoker) -> Self {
        self.invoker = invoker;
        self
    }

    /// Actions for the line at `range.start`: the quick fix when the line
    /// mentions `struct`, nothing otherwise.
    pub fn provide_code_actions<D>(&self, document: &D, range: Range) -> Vec<CodeAction>
    where
        D: DocumentModel + ?Sized,
    {
        let line = range.start.line;
        let Some(text) = document.line_at(line) else {
            return Vec::new();
        };
        if !should_offer(&text) {
            return Vec::new();
        }

        TriggerContext::detect(&text)
            .map(|trigger| CodeAction {
                title: IMPLEMENT_ACTION_TITLE.to_string(),
                kind: CodeActionKind::QuickFix,
                line,
                trigger,
            })
            .into_iter()
            .collect()
    }

    /// The quick fix for `line`, or why there is none.
    ///
    /// # Errors
    ///
    /// [`AssistError::LineOutOfRange`] past the end of the document,
    /// [`AssistError::NoStructAtLine`] when the line doesn't trigger.
    pub fn action_at<D>(&self, document: &D, line: usize) -> Result<CodeAction>
    where
        D: DocumentModel + ?Sized,
    {
        if document.line_at(line).is_none() {
            return Err(AssistError::LineOutOfRange { line });
        }
        self.provide_code_actions(document, Range::lines(line, line))
            .into_iter()
            .next()
            .ok_or(AssistError::NoStructAtLine { line })
    }

    /// Open the interface picker for `action`.
    ///
    /// # Errors
    ///
    /// Fails fast with [`AssistError::MissingStructName`], before any query
    /// runs, when the action's line names no struct. The failure is also
    /// reported through the notifier.
    pub fn open_prompt(&self, action: &CodeAction) -> Result<(SelectionPrompt<I>, PromptHandle)> {
        if !action.trigger.has_struct_name() {
            let err = AssistError::MissingStructName {
                line_text: action.trigger.line_text().to_string(),
            };
            self.report(&err);
            return Err(err);
        }

        let (prompt, handle) = SelectionPrompt::new(self.client.clone(), &self.config.prompt);
        Ok((prompt.with_notifier(Arc::clone(&self.notifier)), handle))
    }

    /// Drive `prompt` to completion and implement the chosen interface.
    ///
    /// Returns `Ok(None)` when the prompt was dismissed.
    pub async fn resolve<D>(
        &self,
        action: &CodeAction,
        document: &mut D,
        prompt: SelectionPrompt<I>,
    ) -> Result<Option<Insertion>>
    where
        D: DocumentModel + ?Sized,
    {
        match prompt.run().await {
            PromptOutcome::Selected(candidate) => {
                self.implement(action, document, &candidate).await.map(Some)
            }
            PromptOutcome::Cancelled => {
                debug!(line = action.line, "interface prompt dismissed");
                Ok(None)
            }
        }
    }

    /// Compose, run the generator, and insert its output.
    ///
    /// # Errors
    ///
    /// Any failure is reported through the notifier and returned; the
    /// document is left as it was.
    pub async fn implement<D>(
        &self,
        action: &CodeAction,
        document: &mut D,
        candidate: &InterfaceCandidate,
    ) -> Result<Insertion>
    where
        D: DocumentModel + ?Sized,
    {
        let result = self.generate_and_apply(action, document, candidate).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn generate_and_apply<D>(
        &self,
        action: &CodeAction,
        document: &mut D,
        candidate: &InterfaceCandidate,
    ) -> Result<Insertion>
    where
        D: DocumentModel + ?Sized,
    {
        let command = compose(&action.trigger, candidate, &self.config.generation)?;
        info!(command = %self.invoker.command_line(&command), "generating stubs");

        let working_dir = document.working_dir();
        let stub = self
            .invoker
            .invoke(&command, &working_dir)
            .await
            .into_stub()?;

        apply(document, command.struct_name(), &stub).await
    }

    fn report(&self, err: &AssistError) {
        warn!(error = %err, "quick fix failed");
        self.notifier.error(&err.to_string());
    }
}
