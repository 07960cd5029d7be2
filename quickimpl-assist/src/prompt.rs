//! The interactive interface picker.
//!
//! A [`SelectionPrompt`] is a small state machine driven by [`PromptEvent`]s
//! from the host UI:
//!
//! ```text
//! Idle -> AwaitingInput -> Debouncing -> Querying -> ShowingResults -> Selected
//!                              ^            |              |         \-> Cancelled
//!                              +------------+--------------+
//!                                    value changed
//! ```
//!
//! Every value change replaces the single pending debounce deadline, so a
//! burst of keystrokes inside the debounce window runs one query, with the
//! last value. A value change while a query is running abandons that query;
//! its results are never shown. Selecting or dismissing disposes the prompt
//! along with anything still in flight.

use std::{sync::Arc, time::Duration};

use futures::future::BoxFuture;
use quickimpl_config::PromptConfig;
use quickimpl_core::InterfaceCandidate;
use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};
use tracing::{debug, trace, warn};

use crate::{Notifier, QueryClient, Result, SymbolIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Idle,
    AwaitingInput,
    Debouncing,
    Querying,
    ShowingResults,
    Selected,
    Cancelled,
}

/// Input from the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// The search text changed
    ValueChanged(String),
    /// The user picked the item at this index of the displayed list
    Select(usize),
    /// The user closed the prompt
    Dismiss,
}

/// Output for the host UI to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptUpdate {
    State(PromptState),
    Placeholder(String),
    Busy(bool),
    /// Replacement for the displayed list
    Items(Vec<InterfaceCandidate>),
    /// The last query failed; an empty list follows
    QueryFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Selected(InterfaceCandidate),
    Cancelled,
}

/// The host's end of a prompt: send events, receive updates.
///
/// Dropping the handle dismisses the prompt.
pub struct PromptHandle {
    events: mpsc::UnboundedSender<PromptEvent>,
    updates: mpsc::UnboundedReceiver<PromptUpdate>,
}

impl PromptHandle {
    /// Returns false if the prompt is already disposed.
    pub fn set_value(&self, value: impl Into<String>) -> bool {
        self.send(PromptEvent::ValueChanged(value.into()))
    }

    pub fn select(&self, index: usize) -> bool {
        self.send(PromptEvent::Select(index))
    }

    pub fn dismiss(&self) -> bool {
        self.send(PromptEvent::Dismiss)
    }

    fn send(&self, event: PromptEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Next update, or `None` once the prompt is disposed and drained.
    pub async fn next_update(&mut self) -> Option<PromptUpdate> {
        self.updates.recv().await
    }

    /// Skip ahead to the next replacement list.
    pub async fn next_items(&mut self) -> Option<Vec<InterfaceCandidate>> {
        while let Some(update) = self.updates.recv().await {
            if let PromptUpdate::Items(items) = update {
                return Some(items);
            }
        }
        None
    }
}

struct PendingQuery {
    deadline: Instant,
    value: String,
}

type QueryOutput = (String, Result<Vec<InterfaceCandidate>>);

pub struct SelectionPrompt<I: ?Sized> {
    client: QueryClient<I>,
    debounce: Duration,
    placeholder: String,
    notifier: Option<Arc<dyn Notifier>>,
    state: PromptState,
    items: Vec<InterfaceCandidate>,
    events: mpsc::UnboundedReceiver<PromptEvent>,
    updates: mpsc::UnboundedSender<PromptUpdate>,
}

impl<I: SymbolIndex + ?Sized + 'static> SelectionPrompt<I> {
    /// Create a prompt and the handle the host drives it with.
    pub fn new(client: QueryClient<I>, config: &PromptConfig) -> (Self, PromptHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        let prompt = Self {
            client,
            debounce: config.debounce(),
            placeholder: config.placeholder.clone(),
            notifier: None,
            state: PromptState::Idle,
            items: Vec::new(),
            events: event_rx,
            updates: update_tx,
        };
        let handle = PromptHandle {
            events: event_tx,
            updates: update_rx,
        };
        (prompt, handle)
    }

    /// Report failed queries as warnings through `notifier`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Run until the user selects an interface or dismisses the prompt.
    pub async fn run(mut self) -> PromptOutcome {
        self.emit(PromptUpdate::Placeholder(self.placeholder.clone()));
        self.transition(PromptState::AwaitingInput);

        let mut pending: Option<PendingQuery> = None;
        let mut in_flight: Option<BoxFuture<'static, QueryOutput>> = None;

        loop {
            let deadline = pending.as_ref().map(|query| query.deadline);

            tokio::select! {
                event = self.events.recv() => match event {
                    Some(PromptEvent::ValueChanged(value)) => {
                        self.emit(PromptUpdate::Busy(true));
                        if in_flight.take().is_some() {
                            debug!("abandoning superseded interface query");
                        }
                        pending = Some(PendingQuery {
                            deadline: Instant::now() + self.debounce,
                            value,
                        });
                        self.transition(PromptState::Debouncing);
                        self.emit(PromptUpdate::Busy(false));
                    }
                    Some(PromptEvent::Select(index)) => match self.items.get(index).cloned() {
                        Some(candidate) => {
                            self.transition(PromptState::Selected);
                            return PromptOutcome::Selected(candidate);
                        }
                        None => warn!(
                            index,
                            shown = self.items.len(),
                            "ignoring selection outside the displayed list"
                        ),
                    },
                    Some(PromptEvent::Dismiss) | None => {
                        self.transition(PromptState::Cancelled);
                        return PromptOutcome::Cancelled;
                    }
                },
                () = debounce_elapsed(deadline), if deadline.is_some() => {
                    if let Some(query) = pending.take() {
                        self.transition(PromptState::Querying);
                        let client = self.client.clone();
                        in_flight = Some(Box::pin(async move {
                            let result = client.query_interfaces(&query.value).await;
                            (query.value, result)
                        }));
                    }
                },
                (value, result) = query_finished(&mut in_flight), if in_flight.is_some() => {
                    in_flight = None;
                    self.show_results(&value, result);
                },
            }
        }
    }

    fn show_results(&mut self, keyword: &str, result: Result<Vec<InterfaceCandidate>>) {
        match result {
            Ok(items) => {
                debug!(keyword, count = items.len(), "showing interfaces");
                self.items = items;
            }
            Err(e) => {
                warn!(keyword, error = %e, "interface query failed");
                self.items.clear();
                let message = e.to_string();
                if let Some(notifier) = &self.notifier {
                    notifier.warning(&message);
                }
                self.emit(PromptUpdate::QueryFailed(message));
            }
        }
        self.emit(PromptUpdate::Items(self.items.clone()));
        self.transition(PromptState::ShowingResults);
    }

    fn transition(&mut self, state: PromptState) {
        trace!(from = ?self.state, to = ?state, "prompt transition");
        self.state = state;
        self.emit(PromptUpdate::State(state));
    }

    fn emit(&self, update: PromptUpdate) {
        // the host may stop listening before the prompt finishes
        let _ = self.updates.send(update);
    }
}

async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn query_finished(in_flight: &mut Option<BoxFuture<'static, QueryOutput>>) -> QueryOutput {
    match in_flight {
        Some(query) => query.await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use quickimpl_core::{Range, Symbol, SymbolKind};

    use super::*;
    use crate::testing::{FailingSymbolIndex, RecordingNotifier, StaticSymbolIndex};

    fn symbols() -> Vec<Symbol> {
        vec![
            Symbol::new("Reader", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("Writer", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("ReadWriter", SymbolKind::Interface, Range::default()).in_container("io"),
            Symbol::new("Reader", SymbolKind::Struct, Range::default()).in_container("bufio"),
        ]
    }

    fn open<I: SymbolIndex + 'static>(index: Arc<I>) -> (SelectionPrompt<I>, PromptHandle) {
        SelectionPrompt::new(QueryClient::new(index), &PromptConfig::default())
    }

    fn names(items: &[InterfaceCandidate]) -> Vec<String> {
        items.iter().map(InterfaceCandidate::qualified_name).collect()
    }

    #[test]
    fn test_starts_idle() {
        let (prompt, _handle) = open(Arc::new(StaticSymbolIndex::new(symbols())));
        assert_eq!(prompt.state(), PromptState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_changes_run_one_query_with_last_value() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, mut handle) = open(Arc::clone(&index));
        let task = tokio::spawn(prompt.run());

        for value in ["R", "Re", "Rea", "Read"] {
            handle.set_value(value);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        let items = handle.next_items().await.unwrap();

        assert_eq!(index.queries(), vec!["Read"]);
        assert_eq!(names(&items), vec!["io.Reader", "io.ReadWriter"]);

        handle.select(0);
        assert_eq!(
            task.await.unwrap(),
            PromptOutcome::Selected(InterfaceCandidate::new("Reader").in_package("io"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_changes_outside_window_query_each_time() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, mut handle) = open(Arc::clone(&index));
        let task = tokio::spawn(prompt.run());

        handle.set_value("Writ");
        assert_eq!(
            names(&handle.next_items().await.unwrap()),
            vec!["io.Writer", "io.ReadWriter"]
        );

        handle.set_value("ReadW");
        assert_eq!(
            names(&handle.next_items().await.unwrap()),
            vec!["io.ReadWriter"]
        );

        assert_eq!(index.queries(), vec!["Writ", "ReadW"]);
        handle.dismiss();
        assert_eq!(task.await.unwrap(), PromptOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_sequence() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, mut handle) = open(index);
        let task = tokio::spawn(prompt.run());

        handle.set_value("Writer");
        handle.next_items().await.unwrap();
        handle.select(0);
        task.await.unwrap();

        let mut updates = Vec::new();
        while let Some(update) = handle.next_update().await {
            updates.push(update);
        }
        let states: Vec<PromptState> = updates
            .iter()
            .filter_map(|update| match update {
                PromptUpdate::State(state) => Some(*state),
                _ => None,
            })
            .collect();

        // next_items stops at the list, before the transition it triggers
        assert_eq!(
            states,
            vec![PromptState::ShowingResults, PromptState::Selected]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_update_stream() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, mut handle) = open(index);

        handle.set_value("Writer");
        let task = tokio::spawn(prompt.run());
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.dismiss();
        assert_eq!(task.await.unwrap(), PromptOutcome::Cancelled);

        let mut updates = Vec::new();
        while let Some(update) = handle.next_update().await {
            updates.push(update);
        }

        assert_eq!(
            updates,
            vec![
                PromptUpdate::Placeholder(PromptConfig::default().placeholder),
                PromptUpdate::State(PromptState::AwaitingInput),
                PromptUpdate::Busy(true),
                PromptUpdate::State(PromptState::Debouncing),
                PromptUpdate::Busy(false),
                PromptUpdate::State(PromptState::Querying),
                PromptUpdate::Items(vec![
                    InterfaceCandidate::new("Writer").in_package("io"),
                    InterfaceCandidate::new("ReadWriter").in_package("io"),
                ]),
                PromptUpdate::State(PromptState::ShowingResults),
                PromptUpdate::State(PromptState::Cancelled),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_during_debounce_runs_no_query() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, handle) = open(Arc::clone(&index));

        handle.set_value("Re");
        handle.dismiss();

        assert_eq!(prompt.run().await, PromptOutcome::Cancelled);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(index.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_query_results_are_discarded() {
        let index =
            Arc::new(StaticSymbolIndex::new(symbols()).with_delay(Duration::from_millis(500)));
        let (prompt, mut handle) = open(Arc::clone(&index));
        let task = tokio::spawn(prompt.run());

        handle.set_value("Writ");
        // debounce fires at 300ms, the query would answer at 800ms
        tokio::time::sleep(Duration::from_millis(400)).await;
        handle.set_value("Read");

        let items = handle.next_items().await.unwrap();
        assert_eq!(index.queries(), vec!["Writ", "Read"]);
        assert_eq!(names(&items), vec!["io.Reader", "io.ReadWriter"]);

        handle.dismiss();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_failure_shows_empty_list_and_warns() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (prompt, mut handle) = open(Arc::new(FailingSymbolIndex::new("gopls crashed")));
        let prompt = prompt.with_notifier(notifier.clone());
        let task = tokio::spawn(prompt.run());

        handle.set_value("Read");
        let mut failure = None;
        while let Some(update) = handle.next_update().await {
            match update {
                PromptUpdate::QueryFailed(message) => failure = Some(message),
                PromptUpdate::Items(items) => {
                    assert!(items.is_empty());
                    break;
                }
                _ => {}
            }
        }

        assert_eq!(
            failure.as_deref(),
            Some("symbol query failed: gopls crashed")
        );
        let warnings = notifier.notifications();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].severity.is_warning());

        handle.dismiss();
        assert_eq!(task.await.unwrap(), PromptOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_selection_is_ignored() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, mut handle) = open(index);
        let task = tokio::spawn(prompt.run());

        handle.set_value("Read");
        assert_eq!(handle.next_items().await.unwrap().len(), 2);

        handle.select(5);
        handle.select(1);
        assert_eq!(
            task.await.unwrap(),
            PromptOutcome::Selected(InterfaceCandidate::new("ReadWriter").in_package("io"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_before_results_is_ignored() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, handle) = open(index);

        handle.select(0);
        handle.dismiss();
        assert_eq!(prompt.run().await, PromptOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let index = Arc::new(StaticSymbolIndex::new(symbols()));
        let (prompt, handle) = open(index);
        drop(handle);
        assert_eq!(prompt.run().await, PromptOutcome::Cancelled);
    }
}
