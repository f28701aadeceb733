//! Model and engine settings.
use serde::{Deserialize, Serialize};

/// Settings handed to the solving engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub time_limit_secs: f64,
    pub num_workers: i32,
    pub random_seed: i32,
    pub log_search_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 60.0,
            num_workers: 8,
            random_seed: 42,
            log_search_progress: false,
        }
    }
}

/// Which optional constraint families are emitted.
///
/// Full attendance, lecture joint attendance and the occurrence link are always on: without them
/// the decoded timetable is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintToggles {
    pub session_occurs: bool,
    pub daily_variety: bool,
    pub group_exclusivity: bool,
    pub single_group: bool,
    pub consecutive_load: bool,
}

impl Default for ConstraintToggles {
    fn default() -> Self {
        Self {
            session_occurs: true,
            daily_variety: true,
            group_exclusivity: true,
            single_group: true,
            consecutive_load: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    pub toggles: ConstraintToggles,
    /// A group never attends more than this many consecutive slots. `None` lifts the limit.
    pub max_consecutive_slots: Option<usize>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            toggles: ConstraintToggles::default(),
            max_consecutive_slots: Some(3),
        }
    }
}

impl ModelOptions {
    pub fn with_toggles(toggles: ConstraintToggles) -> Self {
        Self {
            toggles,
            ..Self::default()
        }
    }
}
