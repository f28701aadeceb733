//! Turning solved variable values into a timetable.
use crate::catalog::{Catalog, SessionKind, group_label};
use crate::error::{ScheduleError, ScheduleResult};
use crate::instance::{Attendance, ProblemInstance, SessionSlot, Solution};
use serde::Serialize;

/// One group attending one session occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub course: usize,
    pub session: usize,
    pub kind: SessionKind,
    pub group: usize,
    /// e.g. `"Security Lecture"`
    pub label: String,
    /// e.g. `"Group 1"`
    pub group_label: String,
}

/// Entries per (day, slot). Every slot of the catalog is present, possibly empty. Within a slot,
/// entries are in course, session, group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timetable {
    days: Vec<Vec<Vec<Entry>>>,
}

impl Timetable {
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn slots_on(&self, day: usize) -> usize {
        self.days.get(day).map_or(0, Vec::len)
    }

    pub fn slot(&self, day: usize, slot: usize) -> &[Entry] {
        self.days
            .get(day)
            .and_then(|d| d.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// (day, slot, entries) in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[Entry])> {
        self.days.iter().enumerate().flat_map(|(d, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(t, entries)| (d, t, entries.as_slice()))
        })
    }

    pub fn entries_for_group(&self, group: usize) -> Vec<(usize, usize, &Entry)> {
        self.iter()
            .flat_map(|(d, t, entries)| {
                entries
                    .iter()
                    .filter(move |e| e.group == group)
                    .map(move |e| (d, t, e))
            })
            .collect()
    }

    pub fn num_entries(&self) -> usize {
        self.iter().map(|(_, _, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries() == 0
    }
}

#[cfg(test)]
impl Timetable {
    /// Places `(day, slot, course, session, group)` entries directly, in the given order.
    pub(crate) fn from_placements(catalog: &Catalog, placements: &[(usize, usize, usize, usize, usize)]) -> Self {
        let mut days: Vec<Vec<Vec<Entry>>> = catalog.days.iter().map(|d| vec![Vec::new(); d.slots]).collect();
        for &(d, t, c, s, g) in placements {
            let course = &catalog.courses[c];
            days[d][t].push(Entry {
                course: c,
                session: s,
                kind: course.sessions[s],
                group: g,
                label: course.session_label(s),
                group_label: group_label(g),
            });
        }
        Self { days }
    }
}

/// Rebuilds the timetable from a solution of `instance`, which must have been built from
/// `catalog`.
pub fn decode(catalog: &Catalog, instance: &ProblemInstance, solution: &Solution) -> ScheduleResult<Timetable> {
    if solution.len() != instance.num_vars() {
        return Err(ScheduleError::IncompleteSolution {
            expected: instance.num_vars(),
            got: solution.len(),
        });
    }
    let x = instance.schedule_vars();
    let z = instance.attend_vars();

    let mut days = Vec::with_capacity(catalog.num_days());
    for (d, day) in catalog.days.iter().enumerate() {
        let mut slots = Vec::with_capacity(day.slots);
        for t in 0..day.slots {
            let mut entries = Vec::new();
            for (c, course) in catalog.courses.iter().enumerate() {
                for (s, &kind) in course.sessions.iter().enumerate() {
                    let occurrence = SessionSlot {
                        course: c,
                        session: s,
                        day: d,
                        slot: t,
                    };
                    if !solution.value(x[occurrence]) {
                        continue;
                    }
                    for g in 0..catalog.groups {
                        let attends = z[Attendance {
                            course: c,
                            session: s,
                            day: d,
                            slot: t,
                            group: g,
                        }];
                        if solution.value(attends) {
                            entries.push(Entry {
                                course: c,
                                session: s,
                                kind,
                                group: g,
                                label: course.session_label(s),
                                group_label: group_label(g),
                            });
                        }
                    }
                }
            }
            slots.push(entries);
        }
        days.push(slots);
    }
    Ok(Timetable { days })
}
