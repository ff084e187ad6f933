//! Request sequencing for callers that issue overlapping solves
//!
//! A caller tags every outgoing request with an id from
//! [`RequestSequencer::issue`] and hands results back through
//! [`RequestSequencer::accept`]. A result whose id is not newer than the
//! last accepted one is stale and must be dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues request ids and filters out stale results
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    accepted: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next outgoing request
    pub fn issue(&self) -> RequestId {
        RequestId(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Record a result for `id`. Returns false when a newer result was
    /// already accepted.
    pub fn accept(&self, id: RequestId) -> bool {
        let previous = self.accepted.fetch_max(id.0, Ordering::SeqCst);
        let fresh = id.0 > previous;
        if !fresh {
            tracing::debug!(id = id.0, latest = previous, "dropping stale result");
        }
        fresh
    }

    /// Last accepted request, if any
    pub fn latest_accepted(&self) -> Option<RequestId> {
        match self.accepted.load(Ordering::SeqCst) {
            0 => None,
            id => Some(RequestId(id)),
        }
    }
}
