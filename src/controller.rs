use tracing::{debug, info, warn};

use crate::api::{ResearchClient, ResearchResult};
use crate::error::{AlreadyPending, ResearchError};

/// Lifecycle of the current research request.
///
/// Exactly one state holds at any time. `Succeeded` and `Failed` end the
/// current request but not the controller: the next accepted `submit`
/// restarts the cycle at `Pending`.
#[derive(Debug)]
pub enum RequestState {
    Idle,
    Pending,
    Succeeded(ResearchResult),
    Failed(ResearchError),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// The stored payload, present only in `Succeeded`.
    pub fn result(&self) -> Option<&ResearchResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The stored failure, present only in `Failed`.
    pub fn error(&self) -> Option<&ResearchError> {
        match self {
            RequestState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// What `submit` did with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank after trimming: nothing was sent and the state did not move.
    Ignored,
    /// The request ran and the state is now `Succeeded` or `Failed`.
    Resolved,
}

/// Owns the one outstanding research request and its state.
///
/// `submit` takes `&mut self`, so a second request cannot start while one is
/// awaited; the explicit pending guard additionally covers a controller whose
/// in-flight future was dropped.
pub struct RequestController {
    client: ResearchClient,
    state: RequestState,
}

impl RequestController {
    pub fn new(client: ResearchClient) -> Self {
        RequestController {
            client,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit a query and wait for it to resolve.
    pub async fn submit(&mut self, query: &str) -> Result<SubmitOutcome, AlreadyPending> {
        self.submit_observed(query, |_| {}).await
    }

    /// Like [`RequestController::submit`], reporting each state transition
    /// to `observe` so a renderer can show the pending phase while the call
    /// is in flight.
    pub async fn submit_observed<F>(
        &mut self,
        query: &str,
        mut observe: F,
    ) -> Result<SubmitOutcome, AlreadyPending>
    where
        F: FnMut(&RequestState),
    {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            debug!("blank query ignored");
            return Ok(SubmitOutcome::Ignored);
        }
        if self.state.is_pending() {
            return Err(AlreadyPending);
        }

        // Entering Pending drops the previous result and error; stale data
        // never shows next to a new request.
        self.state = RequestState::Pending;
        observe(&self.state);
        info!(query = trimmed, "research request submitted");

        self.state = match self.client.research(trimmed).await {
            Ok(result) => {
                info!(sources = result.sources.len(), "research request succeeded");
                RequestState::Succeeded(result)
            }
            Err(error) => {
                warn!(%error, "research request failed");
                RequestState::Failed(error)
            }
        };
        observe(&self.state);

        Ok(SubmitOutcome::Resolved)
    }
}
