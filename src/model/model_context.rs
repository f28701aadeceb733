//! Shared state for the model-building passes.
use super::{add_day_constraints, add_group_constraints, add_objective, add_session_constraints};
use crate::catalog::Catalog;
use crate::config::{ConstraintToggles, ModelOptions};
use crate::error::{ScheduleError, ScheduleResult};
use crate::instance::{Attendance, Comparison, ConstraintFamily, LinearConstraint, ProblemInstance, SessionSlot, VarId};
use log::{debug, info};

/// Catalog, options and the instance under construction.
#[derive(Debug)]
pub struct ModelBuilderContext<'a> {
    pub catalog: &'a Catalog,
    pub options: ModelOptions,
    pub instance: ProblemInstance,
}

impl<'a> ModelBuilderContext<'a> {
    /// Validates the catalog and creates every decision variable. No constraint exists yet.
    pub fn new(catalog: &'a Catalog, options: ModelOptions) -> ScheduleResult<Self> {
        catalog.validate()?;
        if options.max_consecutive_slots == Some(0) {
            return Err(ScheduleError::configuration(
                "max_consecutive_slots must be at least 1",
            ));
        }
        Ok(Self {
            catalog,
            options,
            instance: ProblemInstance::with_variables(catalog),
        })
    }

    pub fn new_with_toggles(catalog: &'a Catalog, toggles: ConstraintToggles) -> ScheduleResult<Self> {
        Self::new(catalog, ModelOptions::with_toggles(toggles))
    }

    pub fn toggles(&self) -> ConstraintToggles {
        self.options.toggles
    }

    /// `X[course, session, day, slot]`
    pub fn x(&self, course: usize, session: usize, day: usize, slot: usize) -> VarId {
        self.instance.schedule_vars()[SessionSlot {
            course,
            session,
            day,
            slot,
        }]
    }

    /// `Z[course, session, day, slot, group]`
    pub fn z(&self, course: usize, session: usize, day: usize, slot: usize, group: usize) -> VarId {
        self.instance.attend_vars()[Attendance {
            course,
            session,
            day,
            slot,
            group,
        }]
    }

    /// Sum of `X` over the whole week for one session.
    pub fn session_in_week(&self, course: usize, session: usize) -> Vec<(i64, VarId)> {
        self.catalog
            .time_slots()
            .map(|(d, t)| (1, self.x(course, session, d, t)))
            .collect()
    }

    /// (course, session) pairs of every non-lecture session.
    pub fn non_lecture_sessions(&self) -> Vec<(usize, usize)> {
        self.catalog
            .courses
            .iter()
            .enumerate()
            .flat_map(|(c, course)| {
                course
                    .sessions
                    .iter()
                    .enumerate()
                    .filter(|(_, kind)| !kind.is_lecture())
                    .map(move |(s, _)| (c, s))
            })
            .collect()
    }

    pub fn add(&mut self, family: ConstraintFamily, terms: Vec<(i64, VarId)>, cmp: Comparison, rhs: i64) {
        self.instance.add_constraint(LinearConstraint {
            family,
            terms,
            cmp,
            rhs,
        });
    }

    pub fn count(&self, family: ConstraintFamily) -> usize {
        self.instance.constraints_of(family).count()
    }
}

/// Runs every constraint pass in a fixed order and returns the finished instance.
pub fn build_model_pipeline(mut ctx: ModelBuilderContext<'_>) -> ProblemInstance {
    add_session_constraints(&mut ctx);
    add_day_constraints(&mut ctx);
    add_group_constraints(&mut ctx);
    add_objective(&mut ctx);

    for family in [
        ConstraintFamily::SessionOccurs,
        ConstraintFamily::FullAttendance,
        ConstraintFamily::SingleGroup,
        ConstraintFamily::LectureJoint,
        ConstraintFamily::OccurrenceLink,
        ConstraintFamily::DailyVariety,
        ConstraintFamily::GroupExclusivity,
        ConstraintFamily::ConsecutiveLoad,
    ] {
        debug!("{family}: {} constraints", ctx.count(family));
    }
    info!(
        "Built model with {} variables, {} constraints and {} objective terms",
        ctx.instance.num_vars(),
        ctx.instance.constraints().len(),
        ctx.instance.objective().len()
    );
    ctx.instance
}

/// Validates `catalog` and builds its problem instance.
pub fn build_model(catalog: &Catalog, options: ModelOptions) -> ScheduleResult<ProblemInstance> {
    let ctx = ModelBuilderContext::new(catalog, options)?;
    Ok(build_model_pipeline(ctx))
}
