//! View state sequencer: the per-screen fetch state machine.
//!
//! # Responsibility
//! - Track `Idle -> Loading -> Ready | Error` per screen, with `Ready` and
//!   `Error` able to re-enter `Loading` on an explicit refresh.
//! - Discard stale responses: every fetch cycle mints a generation token,
//!   and only the latest generation may apply its result.
//!
//! # Invariants
//! - Last request wins. A result carrying an older token is ignored
//!   outright; it neither changes the payload nor the status.
//! - The payload is cleared on `Error` so an error banner is never shown
//!   next to a mismatched list; retry stays possible by starting a new
//!   fetch cycle.
//! - Auth short-circuit issues no network call: the screen lands in
//!   `Error` with a log-in message before any request is built.

use crate::gateway::GatewayResult;
use crate::session::SessionIdentity;

/// Where a screen's fetch cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Generation token minted by [`ViewState::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

/// Whether a fetched result was applied or discarded as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

/// Per-screen fetch state with a payload of type `P`.
#[derive(Debug, Clone)]
pub struct ViewState<P> {
    status: ViewStatus,
    payload: P,
    error_message: Option<String>,
    generation: u64,
}

/// The common case: a screen rendering a list of items.
pub type ListViewState<T> = ViewState<Vec<T>>;

impl<P: Default> Default for ViewState<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Default> ViewState<P> {
    pub fn new() -> Self {
        Self {
            status: ViewStatus::Idle,
            payload: P::default(),
            error_message: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access for optimistic patches; valid only in `Ready`.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Starts a new fetch cycle and invalidates every earlier token.
    /// The previous payload stays visible while loading.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.status = ViewStatus::Loading;
        self.error_message = None;
        FetchToken {
            generation: self.generation,
        }
    }

    /// Applies a fetch result if `token` is still the latest generation.
    pub fn apply_result(&mut self, token: FetchToken, result: GatewayResult<P>) -> ApplyOutcome {
        if token.generation != self.generation {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(payload) => {
                self.payload = payload;
                self.status = ViewStatus::Ready;
                self.error_message = None;
            }
            Err(err) => {
                self.payload = P::default();
                self.status = ViewStatus::Error;
                self.error_message = Some(err.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    /// Short-circuits to `Error` without any network activity, e.g. when
    /// the screen requires a session and none is present.
    pub fn fail_auth(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.payload = P::default();
        self.status = ViewStatus::Error;
        self.error_message = Some(message.into());
    }

    /// Returns the session if present; otherwise fails the screen with
    /// `message` and yields nothing, so the caller issues zero calls.
    pub fn require_session<'s>(
        &mut self,
        session: Option<&'s SessionIdentity>,
        message: &str,
    ) -> Option<&'s SessionIdentity> {
        match session {
            Some(identity) => Some(identity),
            None => {
                self.fail_auth(message);
                None
            }
        }
    }
}

impl<T> ListViewState<T> {
    pub fn items(&self) -> &[T] {
        &self.payload
    }
}
