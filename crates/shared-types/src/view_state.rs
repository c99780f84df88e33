//! Fetch lifecycle for a dashboard page.
//!
//! A [`ViewStateController`] owns the state one dashboard displays. Each
//! identifier it is asked to show gets exactly one request, tagged with a
//! [`RequestTicket`]. Results are applied only when their ticket belongs to
//! the most recent request, so a slow response for an earlier identifier
//! can never overwrite the state of a newer one.

use crate::{FetchError, Role};

/// What a dashboard currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Human-readable reason, shown verbatim.
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => FetchState::Loaded(payload),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Loaded and Failed are final for the identifier they belong to.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Loaded(_) | FetchState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> FetchState<U> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(payload) => FetchState::Loaded(f(payload)),
            FetchState::Failed(reason) => FetchState::Failed(reason.clone()),
        }
    }
}

/// Tag attached to an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    epoch: u64,
    id: String,
}

impl RequestTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Identifier the request was issued for.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Outcome of handing a result to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The result became the displayed state.
    Applied,
    /// A newer request superseded this one; the result was dropped.
    Stale,
    /// The request had already settled; the result was dropped.
    AlreadySettled,
}

/// Request bookkeeping and displayed state for one dashboard instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStateController<T> {
    role: Role,
    state: FetchState<T>,
    epoch: u64,
    current_id: Option<String>,
}

impl<T> ViewStateController<T> {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state: FetchState::Idle,
            epoch: 0,
            current_id: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Number of requests issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.epoch
    }

    /// Start showing `id`. Moves to `Loading` and returns the ticket for the
    /// request the caller must now issue. Returns `None` when `id` is the
    /// identifier already being shown, in which case no request is needed.
    pub fn begin(&mut self, id: &str) -> Option<RequestTicket> {
        if self.current_id.as_deref() == Some(id) {
            return None;
        }
        self.epoch += 1;
        self.current_id = Some(id.to_string());
        self.state = FetchState::Loading;
        Some(RequestTicket {
            epoch: self.epoch,
            id: id.to_string(),
        })
    }

    /// Whether `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Apply the result of the request identified by `ticket`.
    pub fn settle(&mut self, ticket: &RequestTicket, result: Result<T, FetchError>) -> Settlement {
        if !self.is_current(ticket) {
            return Settlement::Stale;
        }
        if self.state.is_settled() {
            return Settlement::AlreadySettled;
        }
        self.state = FetchState::from_result(result);
        Settlement::Applied
    }

    /// State to display while `id` is the identifier on screen.
    ///
    /// Until a request for `id` has begun the answer is `Loading`, never
    /// `Idle` or the state of the previous identifier, so a first paint or
    /// an identifier change already shows the pending view.
    pub fn state_for<U>(&self, id: &str, f: impl FnOnce(&T) -> U) -> FetchState<U> {
        if self.current_id.as_deref() == Some(id) {
            self.state.map(f)
        } else {
            FetchState::Loading
        }
    }
}
