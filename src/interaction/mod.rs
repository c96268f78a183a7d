use serde::{Deserialize, Serialize};
use tracing::trace;

/// What caused a redraw request. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawReason {
    Append,
    Viewport,
    Resize,
    Markers,
    Style,
    Clear,
}

/// Handle for one scheduled redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedrawToken(u64);

impl RedrawToken {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Single-slot redraw debouncer.
///
/// At most one token is outstanding. Requests made while a token is pending
/// collapse into it; the host schedules a deferred paint only when
/// [`RedrawScheduler::request`] hands out a new token, and reports it back
/// through [`RedrawScheduler::complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedrawScheduler {
    pending: Option<RedrawToken>,
    next_id: u64,
    collapsed: u64,
}

impl RedrawScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new token when nothing was pending, `None` when the request
    /// was folded into the outstanding one.
    pub fn request(&mut self, reason: RedrawReason) -> Option<RedrawToken> {
        if self.pending.is_some() {
            self.collapsed = self.collapsed.saturating_add(1);
            trace!(?reason, "redraw request collapsed");
            return None;
        }
        let token = self.issue();
        trace!(?reason, token = token.0, "redraw scheduled");
        Some(token)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<RedrawToken> {
        self.pending
    }

    /// Number of requests folded into an outstanding token so far.
    #[must_use]
    pub fn collapsed_requests(&self) -> u64 {
        self.collapsed
    }

    /// Clears the slot if `token` is the outstanding one. Stale tokens from
    /// cancelled or replaced requests return `false`.
    pub fn complete(&mut self, token: RedrawToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) -> Option<RedrawToken> {
        self.pending.take()
    }

    /// Cancels any outstanding token and issues a fresh one.
    pub fn replace(&mut self) -> RedrawToken {
        self.pending = None;
        self.issue()
    }

    fn issue(&mut self) -> RedrawToken {
        self.next_id = self.next_id.wrapping_add(1);
        let token = RedrawToken(self.next_id);
        self.pending = Some(token);
        token
    }
}
