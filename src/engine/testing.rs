//! Test engines with scripted timing and hand-released answers

use super::{EngineError, MatchingEngine};
use crate::core::{QueryDescriptor, SearchResult};
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

type Outcome = Result<Vec<SearchResult>, EngineError>;

/// Engine that replays queued answers per descriptor after a delay
///
/// Unscripted lookups answer immediately with no results. Every call is recorded.
#[derive(Default)]
pub struct ScriptedEngine {
    script: Mutex<FxHashMap<QueryDescriptor, VecDeque<(Duration, Outcome)>>>,
    calls: Mutex<Vec<QueryDescriptor>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer for `descriptor`
    pub fn respond(&self, descriptor: &QueryDescriptor, delay: Duration, outcome: Outcome) {
        self.script
            .lock()
            .unwrap()
            .entry(descriptor.clone())
            .or_default()
            .push_back((delay, outcome));
    }

    pub fn calls(&self) -> Vec<QueryDescriptor> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchingEngine for ScriptedEngine {
    async fn search(&self, descriptor: &QueryDescriptor) -> Outcome {
        self.calls.lock().unwrap().push(descriptor.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(descriptor)
            .and_then(VecDeque::pop_front);

        match next {
            Some((delay, outcome)) => {
                tokio::time::sleep(delay).await;
                outcome
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Engine whose answers are released by the test through oneshot senders
///
/// Each call to [`gate`](Self::gate) opens one pending answer for a descriptor; lookups
/// consume gates in order and wait until the matching sender fires.
#[derive(Default)]
pub struct GatedEngine {
    gates: Mutex<FxHashMap<QueryDescriptor, VecDeque<oneshot::Receiver<Outcome>>>>,
}

impl GatedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self, descriptor: &QueryDescriptor) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .entry(descriptor.clone())
            .or_default()
            .push_back(rx);
        tx
    }
}

#[async_trait]
impl MatchingEngine for GatedEngine {
    async fn search(&self, descriptor: &QueryDescriptor) -> Outcome {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .get_mut(descriptor)
            .and_then(VecDeque::pop_front);

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(EngineError::Transport("gate dropped".into()))),
            None => Err(EngineError::Unavailable(format!("no gate for {descriptor}"))),
        }
    }
}
