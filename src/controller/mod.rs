//! Query orchestration
//!
//! [`QueryController`] owns the user's current input and mode, turns them into a
//! [`QueryDescriptor`] on demand, and runs lookups against a [`MatchingEngine`] only
//! when [`trigger`](QueryController::trigger) is called.
//!
//! Each issued lookup is stamped with a generation number. Lookups run as tokio tasks
//! and report back over a channel; a report whose generation is older than the latest
//! issued one is dropped without touching [`FetchState`]. Superseded tasks are never
//! aborted, they just lose. What the user sees is therefore always the outcome of the
//! most recently triggered lookup, whatever order the answers arrive in.
//!
//! All state lives behind `&mut self`, so the thread that owns the controller is the
//! only writer. Reports are drained with [`pump`](QueryController::pump) from a UI
//! tick, or awaited with [`next_completion`](QueryController::next_completion) and
//! [`settle`](QueryController::settle).

mod state;

pub use state::{Completion, Delivery, FetchState};

use crate::core::{QueryDescriptor, QueryMode};
use crate::engine::{EngineError, MatchingEngine};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// Reactive owner of the query inputs and the fetch lifecycle
pub struct QueryController {
    engine: Arc<dyn MatchingEngine>,
    runtime: Handle,
    input: String,
    mode: QueryMode,
    generation: u64,
    in_flight: usize,
    state: FetchState,
    publisher: watch::Sender<FetchState>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl QueryController {
    /// Create an idle controller that spawns lookups on `runtime`
    #[must_use]
    pub fn new(engine: Arc<dyn MatchingEngine>, runtime: Handle) -> Self {
        let (publisher, _) = watch::channel(FetchState::Idle);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            engine,
            runtime,
            input: String::new(),
            mode: QueryMode::default(),
            generation: 0,
            in_flight: 0,
            state: FetchState::Idle,
            publisher,
            completions_tx,
            completions_rx,
        }
    }

    /// Replace the raw input. Never issues a lookup.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Change the query mode. Never issues a lookup.
    pub fn set_mode(&mut self, mode: QueryMode) {
        self.mode = mode;
    }

    #[must_use]
    pub const fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Descriptor for the current input and mode, rebuilt on every call
    #[must_use]
    pub fn descriptor(&self) -> QueryDescriptor {
        QueryDescriptor::build(&self.input, self.mode)
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Generation of the most recently issued lookup (0 before the first)
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Lookups spawned whose reports have not been received yet
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Watch every state transition
    ///
    /// The receiver starts at the current state. Stale reports never produce a change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.publisher.subscribe()
    }

    /// Issue a lookup for the current descriptor, unless the input is blank
    ///
    /// Returns the generation of the new lookup, or `None` when the input trims to
    /// nothing (in which case neither the state nor the engine is touched).
    pub fn trigger(&mut self) -> Option<u64> {
        let descriptor = self.descriptor();
        if descriptor.is_blank() {
            debug!("ignoring trigger with blank input");
            return None;
        }
        Some(self.issue(descriptor))
    }

    /// Start a lookup for `descriptor`, superseding any lookup still running
    pub fn issue(&mut self, descriptor: QueryDescriptor) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        debug!(generation, %descriptor, "issuing lookup");

        self.transition(FetchState::Pending(descriptor.clone()));
        self.in_flight += 1;

        let engine = Arc::clone(&self.engine);
        let reply = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let query = descriptor.clone();
            // A panicking engine becomes a failed lookup instead of a lost report
            let outcome = tokio::spawn(async move { engine.search(&query).await })
                .await
                .unwrap_or_else(|e| Err(EngineError::Unavailable(e.to_string())));

            // The controller may already be gone; nobody is left to care
            let _ = reply.send(Completion {
                generation,
                descriptor,
                outcome,
            });
        });

        generation
    }

    /// Apply a lookup report
    ///
    /// Only the first report for the latest generation changes the state; any other
    /// is dropped and reported as [`Delivery::Stale`].
    pub fn apply(&mut self, completion: Completion) -> Delivery {
        let Completion {
            generation,
            descriptor,
            outcome,
        } = completion;

        // Only the latest generation may settle, and only once
        if generation != self.generation || !self.state.is_pending() {
            debug!(
                generation,
                current = self.generation,
                %descriptor,
                "discarding superseded lookup"
            );
            return Delivery::Stale;
        }

        let next = match outcome {
            Ok(results) => {
                debug!(generation, %descriptor, results = results.len(), "lookup fulfilled");
                FetchState::Fulfilled(descriptor, results)
            }
            Err(error) => {
                warn!(generation, %descriptor, %error, "lookup failed");
                FetchState::Failed(descriptor, error.to_string())
            }
        };
        self.transition(next);
        Delivery::Applied
    }

    /// Apply every report that has already arrived, without waiting
    ///
    /// Returns how many of them changed the state.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.apply(completion) == Delivery::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next report and apply it
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Delivery> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        self.in_flight -= 1;
        Some(self.apply(completion))
    }

    /// Wait until every spawned lookup has reported, then return the state
    pub async fn settle(&mut self) -> &FetchState {
        while self.next_completion().await.is_some() {}
        &self.state
    }

    fn transition(&mut self, next: FetchState) {
        self.state = next;
        self.publisher.send_replace(self.state.clone());
    }
}
