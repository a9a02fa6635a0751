// vim: set ai et ts=4 sw=4 sts=4:
use std::time::{Duration, Instant};

use super::error::TimeoutError;

/// A wall-clock cutoff for a long-running operation.
///
/// The deadline is checked at well-defined points (each propagation round,
/// each uniquisation candidate, each brute-force combination); once it has
/// passed, the operation gives up and reports a `TimeoutError` instead of a
/// partial result.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    operation: &'static str,
    limit: Duration,
    at: Option<Instant>,
}

impl Deadline {
    pub fn never(operation: &'static str) -> Self {
        Deadline { operation, limit: Duration::from_secs(0), at: None }
    }
    pub fn after(operation: &'static str, limit: Duration) -> Self {
        Deadline {
            operation,
            limit,
            // an unrepresentable instant is as good as no deadline at all
            at: Instant::now().checked_add(limit),
        }
    }

    /// Returns whichever of the two deadlines expires first; the name of the
    /// operation that will be reported on expiry follows that choice.
    pub fn earliest(self, other: Deadline) -> Deadline {
        match (self.at, other.at) {
            (None, _)                    => other,
            (_, None)                    => self,
            (Some(a), Some(b)) if b < a  => other,
            _                            => self,
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.at {
            None     => false,
            Some(at) => Instant::now() >= at,
        }
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn check(&self) -> Result<(), TimeoutError> {
        if self.is_expired() {
            return Err(TimeoutError { operation: self.operation, limit: self.limit });
        }
        Ok(())
    }

    pub fn operation(&self) -> &'static str { self.operation }
    pub fn limit(&self) -> Option<Duration> { self.at.map(|_| self.limit) }
}
