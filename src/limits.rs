// vim: set ai et ts=4 sw=4 sts=4:
use std::time::Duration;

use super::deadline::Deadline;

pub const DEFAULT_MAX_ROUNDS: usize = 300;

/// Safety valves for the solver. None of these carry meaning for the puzzle
/// itself; they only bound how long the engine is willing to keep going.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    pub max_rounds: usize,              // puzzle-level propagation rounds before giving up on convergence
    pub uniqueness_timeout: Duration,
    pub uniquisation_timeout: Duration,
    pub full_solve_timeout: Duration,
    pub brute_force_timeout: Duration,
    pub picture_timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_rounds:           DEFAULT_MAX_ROUNDS,
            uniqueness_timeout:   Duration::from_secs(30),
            uniquisation_timeout: Duration::from_secs(30),
            full_solve_timeout:   Duration::from_secs(45),
            brute_force_timeout:  Duration::from_secs(60),
            picture_timeout:      Duration::from_secs(15),
        }
    }
}

impl Limits {
    /// Applies the same timeout to every deadline-guarded operation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.uniqueness_timeout = timeout;
        self.uniquisation_timeout = timeout;
        self.full_solve_timeout = timeout;
        self.brute_force_timeout = timeout;
        self.picture_timeout = timeout;
        self
    }
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn uniqueness_deadline(&self) -> Deadline {
        Deadline::after("uniqueness check", self.uniqueness_timeout)
    }
    pub fn uniquisation_deadline(&self) -> Deadline {
        Deadline::after("uniquisation", self.uniquisation_timeout)
    }
    pub fn full_solve_deadline(&self) -> Deadline {
        Deadline::after("full solve", self.full_solve_timeout)
    }
    pub fn brute_force_deadline(&self) -> Deadline {
        Deadline::after("brute force", self.brute_force_timeout)
    }
    pub fn picture_deadline(&self) -> Deadline {
        Deadline::after("picture import", self.picture_timeout)
    }
}
