//! Greedy teacher assignment over a decoded timetable.
//!
//! Slots are walked chronologically and entries in timetable order. Each entry goes to the eligible
//! teacher with the lowest running load, the first such teacher in catalog order on ties. Earlier
//! choices are never revisited, so the result depends on that enumeration order.
use crate::catalog::{Catalog, SessionKind};
use crate::decode::Timetable;
use crate::error::{ScheduleError, ScheduleResult};
use log::{debug, info, trace};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherRecord {
    pub day: usize,
    pub slot: usize,
    pub course: usize,
    pub kind: SessionKind,
    pub label: String,
    pub group_label: String,
    pub teacher: String,
}

/// Teacher per (day, slot, label, group label), kept in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeacherAssignment {
    records: Vec<TeacherRecord>,
    #[serde(skip)]
    index: HashMap<(usize, usize, String, String), usize>,
}

impl TeacherAssignment {
    fn push(&mut self, record: TeacherRecord) {
        let key = (
            record.day,
            record.slot,
            record.label.clone(),
            record.group_label.clone(),
        );
        let _ = self.index.insert(key, self.records.len());
        self.records.push(record);
    }

    pub fn records(&self) -> &[TeacherRecord] {
        &self.records
    }

    pub fn teacher_for(&self, day: usize, slot: usize, label: &str, group_label: &str) -> Option<&str> {
        self.index
            .get(&(day, slot, label.to_string(), group_label.to_string()))
            .map(|&i| self.records[i].teacher.as_str())
    }

    /// Number of entries each teacher received.
    pub fn loads(&self) -> BTreeMap<&str, usize> {
        let mut loads = BTreeMap::new();
        for record in &self.records {
            *loads.entry(record.teacher.as_str()).or_default() += 1;
        }
        loads
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Assigns a teacher to every entry of `timetable`.
pub fn assign_teachers(catalog: &Catalog, timetable: &Timetable) -> ScheduleResult<TeacherAssignment> {
    let mut load: HashMap<&str, usize> = HashMap::new();
    let mut assignment = TeacherAssignment::default();

    for (day, slot, entries) in timetable.iter() {
        for entry in entries {
            let Some(course) = catalog.courses.get(entry.course) else {
                return Err(ScheduleError::configuration(format!(
                    "timetable refers to unknown course {}",
                    entry.course
                )));
            };
            let eligible = catalog.eligible_teachers(entry.course, entry.kind);
            if !course.teachers.by_kind.contains_key(&entry.kind.index()) {
                debug!("{}: no dedicated teachers, using the lecture set", entry.label);
            }
            let Some(teacher) = eligible
                .iter()
                .min_by_key(|t| load.get(t.as_str()).copied().unwrap_or(0))
            else {
                return Err(ScheduleError::MissingTeacher {
                    course: course.name.clone(),
                    session: entry.kind.to_string(),
                });
            };
            *load.entry(teacher.as_str()).or_default() += 1;
            trace!("{} / {} at ({day}, {slot}) -> {teacher}", entry.label, entry.group_label);

            assignment.push(TeacherRecord {
                day,
                slot,
                course: entry.course,
                kind: entry.kind,
                label: entry.label.clone(),
                group_label: entry.group_label.clone(),
                teacher: teacher.clone(),
            });
        }
    }
    info!(
        "Assigned {} entries across {} teachers",
        assignment.len(),
        load.len()
    );
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Course, Day, TeacherAvailability};
    use proptest::prelude::*;

    fn catalog(recitation: &[&str]) -> Catalog {
        let mut teachers = TeacherAvailability::new("#FF9999").with(SessionKind::Lecture, &["Lee"]);
        if !recitation.is_empty() {
            teachers = teachers.with(SessionKind::Recitation, recitation);
        }
        Catalog {
            courses: vec![Course::new(
                "Security",
                vec![SessionKind::Lecture, SessionKind::Recitation, SessionKind::Lab],
                teachers,
            )],
            groups: 3,
            days: vec![Day::new("Sun", 3), Day::new("Mon", 3)],
        }
    }

    #[test]
    fn three_occurrences_split_two_and_one() {
        let cat = catalog(&["A", "B"]);
        let table = Timetable::from_placements(&cat, &[(0, 1, 0, 1, 0), (0, 2, 0, 1, 1), (1, 0, 0, 1, 2)]);
        let assignment = assign_teachers(&cat, &table).unwrap();
        let teachers: Vec<_> = assignment.records().iter().map(|r| r.teacher.as_str()).collect();
        assert_eq!(teachers, vec!["A", "B", "A"]);
        assert_eq!(assignment.loads().get("A"), Some(&2));
        assert_eq!(assignment.loads().get("B"), Some(&1));
    }

    #[test]
    fn ties_go_to_first_listed_teacher() {
        let cat = catalog(&["B", "A"]);
        let table = Timetable::from_placements(&cat, &[(0, 0, 0, 1, 0)]);
        let assignment = assign_teachers(&cat, &table).unwrap();
        assert_eq!(assignment.teacher_for(0, 0, "Security Recitation", "Group 1"), Some("B"));
    }

    #[test]
    fn lab_without_dedicated_set_uses_lecture_teachers() {
        let cat = catalog(&["A"]);
        let table = Timetable::from_placements(&cat, &[(1, 2, 0, 2, 1)]);
        let assignment = assign_teachers(&cat, &table).unwrap();
        assert_eq!(assignment.teacher_for(1, 2, "Security Lab", "Group 2"), Some("Lee"));
    }

    #[test]
    fn lectures_get_an_entry_per_group() {
        let cat = catalog(&["A"]);
        let table = Timetable::from_placements(&cat, &[(0, 0, 0, 0, 0), (0, 0, 0, 0, 1), (0, 0, 0, 0, 2)]);
        let assignment = assign_teachers(&cat, &table).unwrap();
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.loads().get("Lee"), Some(&3));
        assert_eq!(cat.lecturer(0), Some("Lee"));
    }

    #[test]
    fn empty_fallback_is_missing_teacher() {
        let mut cat = catalog(&[]);
        cat.courses[0].teachers.by_kind.clear();
        let table = Timetable::from_placements(&cat, &[(0, 0, 0, 2, 0)]);
        let err = assign_teachers(&cat, &table).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::MissingTeacher {
                course: "Security".to_string(),
                session: "Lab".to_string(),
            }
        );
    }

    #[test]
    fn shared_names_share_load_across_courses() {
        let mut cat = catalog(&["A", "B"]);
        cat.courses.push(Course::new(
            "FM",
            vec![SessionKind::Lecture],
            TeacherAvailability::new("#99FF99").with(SessionKind::Lecture, &["A"]),
        ));
        let table = Timetable::from_placements(&cat, &[(0, 0, 1, 0, 0), (0, 1, 0, 1, 0)]);
        let assignment = assign_teachers(&cat, &table).unwrap();
        assert_eq!(assignment.teacher_for(0, 1, "Security Recitation", "Group 1"), Some("B"));
    }

    proptest! {
        #[test]
        fn every_pick_has_minimal_load(
            num_teachers in 1usize..5,
            placements in prop::collection::vec((0usize..2, 0usize..3, 0usize..2, 0usize..3), 0..40),
        ) {
            let names: Vec<String> = (0..num_teachers).map(|i| format!("T{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let cat = catalog(&refs);
            let placements: Vec<_> = placements
                .into_iter()
                .map(|(d, t, s, g)| (d, t, 0, s, g))
                .collect();
            let table = Timetable::from_placements(&cat, &placements);
            let assignment = assign_teachers(&cat, &table).unwrap();
            prop_assert_eq!(assignment.len(), placements.len());

            let mut load: HashMap<&str, usize> = HashMap::new();
            for record in assignment.records() {
                let eligible = cat.eligible_teachers(record.course, record.kind);
                let chosen = load.get(record.teacher.as_str()).copied().unwrap_or(0);
                for other in eligible {
                    prop_assert!(chosen <= load.get(other.as_str()).copied().unwrap_or(0));
                }
                *load.entry(record.teacher.as_str()).or_default() += 1;
            }

            let loads = assignment.loads();
            let recitation: Vec<usize> = refs.iter().map(|t| loads.get(t).copied().unwrap_or(0)).collect();
            let max = recitation.iter().max().copied().unwrap_or(0);
            let min = recitation.iter().min().copied().unwrap_or(0);
            prop_assert!(max - min <= 1);
        }
    }
}
