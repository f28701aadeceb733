//! Errors surfaced by the scheduling pipeline.
use crate::engine::SolveStatus;
use thiserror::Error;

pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The catalog is malformed; raised before any engine call.
    #[error("invalid catalog: {0}")]
    Configuration(String),
    #[error("no teacher available for {course} {session}")]
    MissingTeacher { course: String, session: String },
    #[error("no feasible schedule (engine status: {0})")]
    NoFeasibleSchedule(SolveStatus),
    #[error("solving engine failed: {0}")]
    Engine(String),
    #[error("solution covers {got} variables but the instance has {expected}")]
    IncompleteSolution { expected: usize, got: usize },
}

impl ScheduleError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
