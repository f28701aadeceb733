//! Solver-agnostic problem instance: boolean variables, linear constraints over them and a
//! maximisation objective.
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarId(pub usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A (course, session) occurrence placed at (day, slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSlot {
    pub course: usize,
    pub session: usize,
    pub day: usize,
    pub slot: usize,
}

/// A group attending a [`SessionSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attendance {
    pub course: usize,
    pub session: usize,
    pub day: usize,
    pub slot: usize,
    pub group: usize,
}

impl Attendance {
    pub fn session_slot(&self) -> SessionSlot {
        SessionSlot {
            course: self.course,
            session: self.session,
            day: self.day,
            slot: self.slot,
        }
    }
}

/// Dense layout of every (course, session, day, slot) combination the catalog allows.
///
/// Days may differ in length, so offsets are precomputed per course and per day.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Shape {
    session_offsets: Vec<usize>,
    day_offsets: Vec<usize>,
    day_slots: Vec<usize>,
    total_slots: usize,
    num_sessions: usize,
}

impl Shape {
    fn of(catalog: &Catalog) -> Self {
        let mut session_offsets = Vec::with_capacity(catalog.courses.len());
        let mut acc = 0;
        for course in &catalog.courses {
            session_offsets.push(acc);
            acc += course.num_sessions();
        }
        let mut day_offsets = Vec::with_capacity(catalog.days.len());
        let mut slots = 0;
        for day in &catalog.days {
            day_offsets.push(slots);
            slots += day.slots;
        }
        Self {
            session_offsets,
            day_offsets,
            day_slots: catalog.days.iter().map(|d| d.slots).collect(),
            total_slots: slots,
            num_sessions: acc,
        }
    }

    fn position(&self, key: SessionSlot) -> Option<usize> {
        let course_offset = *self.session_offsets.get(key.course)?;
        let course_end = self
            .session_offsets
            .get(key.course + 1)
            .copied()
            .unwrap_or(self.num_sessions);
        if course_offset + key.session >= course_end {
            return None;
        }
        if key.slot >= *self.day_slots.get(key.day)? {
            return None;
        }
        let time = self.day_offsets[key.day] + key.slot;
        Some((course_offset + key.session) * self.total_slots + time)
    }

    fn len(&self) -> usize {
        self.num_sessions * self.total_slots
    }
}

/// `X[course, session, day, slot]`: the occurrence is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleVars {
    shape: Shape,
    vars: Vec<VarId>,
}

impl ScheduleVars {
    pub fn get(&self, key: SessionSlot) -> Option<VarId> {
        self.shape.position(key).map(|p| self.vars[p])
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Index<SessionSlot> for ScheduleVars {
    type Output = VarId;

    /// Panics when the key lies outside the catalog the variables were created for.
    fn index(&self, key: SessionSlot) -> &VarId {
        match self.shape.position(key) {
            Some(p) => &self.vars[p],
            None => panic!("no schedule variable for {key:?}"),
        }
    }
}

/// `Z[course, session, day, slot, group]`: the group attends the occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendVars {
    shape: Shape,
    groups: usize,
    vars: Vec<VarId>,
}

impl AttendVars {
    fn position(&self, key: Attendance) -> Option<usize> {
        if key.group >= self.groups {
            return None;
        }
        self.shape
            .position(key.session_slot())
            .map(|p| p * self.groups + key.group)
    }

    pub fn get(&self, key: Attendance) -> Option<VarId> {
        self.position(key).map(|p| self.vars[p])
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Index<Attendance> for AttendVars {
    type Output = VarId;

    /// Panics when the key lies outside the catalog the variables were created for.
    fn index(&self, key: Attendance) -> &VarId {
        match self.position(key) {
            Some(p) => &self.vars[p],
            None => panic!("no attendance variable for {key:?}"),
        }
    }
}

/// The scheduling rule a constraint encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstraintFamily {
    SessionOccurs,
    FullAttendance,
    DailyVariety,
    GroupExclusivity,
    SingleGroup,
    LectureJoint,
    OccurrenceLink,
    ConsecutiveLoad,
}

impl fmt::Display for ConstraintFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Le,
    Ge,
    Eq,
}

impl Comparison {
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Le => lhs <= rhs,
            Self::Ge => lhs >= rhs,
            Self::Eq => lhs == rhs,
        }
    }
}

/// `sum(coef * var) <cmp> rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub family: ConstraintFamily,
    pub terms: Vec<(i64, VarId)>,
    pub cmp: Comparison,
    pub rhs: i64,
}

impl LinearConstraint {
    pub fn lhs(&self, solution: &Solution) -> i64 {
        self.terms
            .iter()
            .map(|&(coef, var)| if solution.value(var) { coef } else { 0 })
            .sum()
    }

    pub fn is_satisfied_by(&self, solution: &Solution) -> bool {
        self.cmp.holds(self.lhs(solution), self.rhs)
    }
}

/// A 0/1 value for every variable of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    values: Vec<bool>,
}

impl Solution {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// All-false assignment for `num_vars` variables.
    pub fn zeros(num_vars: usize) -> Self {
        Self {
            values: vec![false; num_vars],
        }
    }

    pub fn value(&self, var: VarId) -> bool {
        self.values.get(var.index()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, var: VarId, value: bool) {
        self.values[var.index()] = value;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The full model handed to a solving engine. Built once by the model builder and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    names: Vec<String>,
    schedule: ScheduleVars,
    attend: AttendVars,
    constraints: Vec<LinearConstraint>,
    objective: Vec<(i64, VarId)>,
}

impl ProblemInstance {
    /// Creates every `X` and `Z` variable for the catalog's shape, in (course, session, day, slot
    /// [, group]) order.
    pub(crate) fn with_variables(catalog: &Catalog) -> Self {
        let shape = Shape::of(catalog);
        let groups = catalog.groups;
        let mut names = Vec::with_capacity(shape.len() * (groups + 1));
        let mut x = vec![VarId(0); shape.len()];
        let mut z = vec![VarId(0); shape.len() * groups];

        for (c, course) in catalog.courses.iter().enumerate() {
            for s in 0..course.num_sessions() {
                for (d, t) in catalog.time_slots() {
                    let key = SessionSlot {
                        course: c,
                        session: s,
                        day: d,
                        slot: t,
                    };
                    // Shape is derived from the same catalog, so every key is in range.
                    let Some(pos) = shape.position(key) else {
                        continue;
                    };
                    x[pos] = VarId(names.len());
                    names.push(format!("X_{c}_{s}_{d}_{t}"));
                    for g in 0..groups {
                        z[pos * groups + g] = VarId(names.len());
                        names.push(format!("Z_{c}_{s}_{d}_{t}_{g}"));
                    }
                }
            }
        }

        Self {
            names,
            schedule: ScheduleVars {
                shape: shape.clone(),
                vars: x,
            },
            attend: AttendVars {
                shape,
                groups,
                vars: z,
            },
            constraints: Vec::new(),
            objective: Vec::new(),
        }
    }

    pub(crate) fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    pub(crate) fn set_objective(&mut self, terms: Vec<(i64, VarId)>) {
        self.objective = terms;
    }

    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    pub fn var_name(&self, var: VarId) -> &str {
        &self.names[var.index()]
    }

    pub fn schedule_vars(&self) -> &ScheduleVars {
        &self.schedule
    }

    pub fn attend_vars(&self) -> &AttendVars {
        &self.attend
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn constraints_of(&self, family: ConstraintFamily) -> impl Iterator<Item = &LinearConstraint> {
        self.constraints.iter().filter(move |c| c.family == family)
    }

    /// Terms of the maximisation objective.
    pub fn objective(&self) -> &[(i64, VarId)] {
        &self.objective
    }

    pub fn objective_value(&self, solution: &Solution) -> i64 {
        self.objective
            .iter()
            .map(|&(coef, var)| if solution.value(var) { coef } else { 0 })
            .sum()
    }

    /// Constraints the solution breaks; empty when it is feasible.
    pub fn violations<'a>(&'a self, solution: &Solution) -> Vec<&'a LinearConstraint> {
        self.constraints
            .iter()
            .filter(|c| !c.is_satisfied_by(solution))
            .collect()
    }

    pub fn is_feasible(&self, solution: &Solution) -> bool {
        solution.len() == self.num_vars() && self.violations(solution).is_empty()
    }
}
