//! End-to-end flow: catalog -> instance -> engine -> timetable -> teachers.
use crate::catalog::Catalog;
use crate::config::{ConstraintToggles, ModelOptions};
use crate::decode::{Timetable, decode};
use crate::engine::{SolveStatus, SolvingEngine};
use crate::error::{ScheduleError, ScheduleResult};
use crate::model::build_model;
use crate::teachers::{TeacherAssignment, assign_teachers};
use log::{info, warn};
use serde::Serialize;

/// A solved week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub status: SolveStatus,
    pub objective: Option<f64>,
    pub timetable: Timetable,
    pub teachers: TeacherAssignment,
}

/// Builds, solves, decodes and staffs the catalog's timetable.
///
/// INFEASIBLE and UNKNOWN become [`ScheduleError::NoFeasibleSchedule`]; teacher assignment is then
/// never attempted.
pub fn schedule<E: SolvingEngine>(catalog: &Catalog, options: ModelOptions, engine: &E) -> ScheduleResult<Schedule> {
    let instance = build_model(catalog, options)?;
    let outcome = engine.solve(&instance)?;
    let solution = match outcome.solution {
        Some(solution) if outcome.status.has_solution() => solution,
        _ => {
            warn!("No feasible schedule, engine reported {}", outcome.status);
            return Err(ScheduleError::NoFeasibleSchedule(outcome.status));
        }
    };
    if let Some(objective) = outcome.objective {
        info!("Engine reported {} with objective {objective}", outcome.status);
    }

    let timetable = decode(catalog, &instance, &solution)?;
    let teachers = assign_teachers(catalog, &timetable)?;
    Ok(Schedule {
        status: outcome.status,
        objective: outcome.objective,
        timetable,
        teachers,
    })
}

/// Status of one solve with a subset of the optional constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosisRun {
    pub toggles: ConstraintToggles,
    pub status: SolveStatus,
}

/// Re-solves with each optional family disabled in turn, then with all of them on, to point at the
/// rule that makes the catalog infeasible.
pub fn diagnose_infeasibility<E: SolvingEngine>(
    catalog: &Catalog,
    options: ModelOptions,
    engine: &E,
) -> ScheduleResult<Vec<DiagnosisRun>> {
    let all = ConstraintToggles::default();
    let candidates = [
        ConstraintToggles {
            session_occurs: false,
            ..all
        },
        ConstraintToggles {
            daily_variety: false,
            ..all
        },
        ConstraintToggles {
            group_exclusivity: false,
            ..all
        },
        ConstraintToggles {
            single_group: false,
            ..all
        },
        ConstraintToggles {
            consecutive_load: false,
            ..all
        },
        all,
    ];

    let mut runs = Vec::with_capacity(candidates.len());
    for toggles in candidates {
        let instance = build_model(catalog, ModelOptions { toggles, ..options })?;
        let status = engine.solve(&instance)?.status;
        info!("Diagnosis {toggles:?} => {status}");
        runs.push(DiagnosisRun { toggles, status });
    }
    Ok(runs)
}
