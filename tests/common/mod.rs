#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::Cell;

use timetable_core::{
    Catalog, ProblemInstance, ScheduleResult, Solution, SolveOutcome, SolveStatus, SolvingEngine, Timetable,
};

/// Enumerates every assignment of a tiny instance and keeps the first one with the best objective.
#[derive(Debug, Default)]
pub struct ExhaustiveEngine;

impl SolvingEngine for ExhaustiveEngine {
    fn solve(&self, instance: &ProblemInstance) -> ScheduleResult<SolveOutcome> {
        let n = instance.num_vars();
        assert!(n <= 20, "instance with {n} variables is too large to enumerate");

        let mut best: Option<(i64, Solution)> = None;
        for bits in 0u32..(1 << n) {
            let solution = Solution::new((0..n).map(|i| bits & (1 << i) != 0).collect());
            if !instance.constraints().iter().all(|c| c.is_satisfied_by(&solution)) {
                continue;
            }
            let value = instance.objective_value(&solution);
            if best.as_ref().is_none_or(|(b, _)| value > *b) {
                best = Some((value, solution));
            }
        }
        Ok(match best {
            Some((value, solution)) => SolveOutcome::solved(SolveStatus::Optimal, solution, value as f64),
            None => SolveOutcome::unsolved(SolveStatus::Infeasible),
        })
    }
}

/// Replies with a fixed outcome and counts how often it was asked.
#[derive(Debug)]
pub struct ScriptedEngine {
    pub outcome: SolveOutcome,
    pub calls: Cell<usize>,
}

impl ScriptedEngine {
    pub fn new(outcome: SolveOutcome) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
        }
    }
}

impl SolvingEngine for ScriptedEngine {
    fn solve(&self, _instance: &ProblemInstance) -> ScheduleResult<SolveOutcome> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.outcome.clone())
    }
}

/// Checks the attendance, exclusivity and joint-lecture properties of a decoded timetable.
pub fn assert_timetable_invariants(catalog: &Catalog, timetable: &Timetable) {
    for (c, course) in catalog.courses.iter().enumerate() {
        for s in 0..course.num_sessions() {
            for g in 0..catalog.groups {
                let seen = timetable
                    .iter()
                    .flat_map(|(_, _, entries)| entries)
                    .filter(|e| e.course == c && e.session == s && e.group == g)
                    .count();
                assert_eq!(seen, 1, "{} for group {g} seen {seen} times", course.session_label(s));
            }
        }
    }

    for (d, t, entries) in timetable.iter() {
        for g in 0..catalog.groups {
            let busy = entries.iter().filter(|e| e.group == g).count();
            assert!(busy <= 1, "group {g} double-booked at ({d}, {t})");
        }
        for lecture in entries.iter().filter(|e| e.kind.is_lecture()) {
            for g in 0..catalog.groups {
                assert!(
                    entries.iter().any(|e| e.label == lecture.label && e.group == g),
                    "{} at ({d}, {t}) misses group {g}",
                    lecture.label
                );
            }
        }
    }
}
