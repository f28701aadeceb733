//! Boundary to the external solving engine.
#[cfg(feature = "cp-sat")]
mod cp_sat_engine;

#[cfg(feature = "cp-sat")]
pub use cp_sat_engine::CpSatEngine;

use crate::error::ScheduleResult;
use crate::instance::{ProblemInstance, Solution};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unknown,
}

impl SolveStatus {
    /// Whether the engine produced variable values worth decoding.
    pub fn has_solution(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Optimal => "OPTIMAL",
            Self::Feasible => "FEASIBLE",
            Self::Infeasible => "INFEASIBLE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// What an engine reports back. `solution` is present exactly when the status has one.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub solution: Option<Solution>,
    pub objective: Option<f64>,
}

impl SolveOutcome {
    pub fn solved(status: SolveStatus, solution: Solution, objective: f64) -> Self {
        Self {
            status,
            solution: Some(solution),
            objective: Some(objective),
        }
    }

    pub fn unsolved(status: SolveStatus) -> Self {
        Self {
            status,
            solution: None,
            objective: None,
        }
    }
}

/// Anything that can take a [`ProblemInstance`] and search for a maximising assignment.
pub trait SolvingEngine {
    fn solve(&self, instance: &ProblemInstance) -> ScheduleResult<SolveOutcome>;
}

impl<E: SolvingEngine + ?Sized> SolvingEngine for &E {
    fn solve(&self, instance: &ProblemInstance) -> ScheduleResult<SolveOutcome> {
        (**self).solve(instance)
    }
}
