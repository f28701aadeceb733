//! Static problem data: courses, their sessions, groups, the weekly slot layout and teacher
//! availability.
use crate::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Kind of a course session. Lectures are attended by every group at once, the other kinds by a
/// single group per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Recitation,
    Lab,
}

impl SessionKind {
    pub const ALL: [SessionKind; 3] = [Self::Lecture, Self::Recitation, Self::Lab];

    /// Index used to key teacher availability.
    pub fn index(self) -> usize {
        match self {
            Self::Lecture => 0,
            Self::Recitation => 1,
            Self::Lab => 2,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Recitation => "Recitation",
            Self::Lab => "Lab",
        }
    }

    pub fn is_lecture(self) -> bool {
        self == Self::Lecture
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Eligible teachers per session-kind index, plus the display color of the course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAvailability {
    pub by_kind: BTreeMap<usize, Vec<String>>,
    pub color: String,
}

impl TeacherAvailability {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            by_kind: BTreeMap::new(),
            color: color.into(),
        }
    }

    pub fn with(mut self, kind: SessionKind, teachers: &[&str]) -> Self {
        self.by_kind
            .insert(kind.index(), teachers.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn lecture_teachers(&self) -> &[String] {
        self.by_kind
            .get(&SessionKind::Lecture.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    /// Session `s` of the course has kind `sessions[s]`; index 0 is the lecture.
    pub sessions: Vec<SessionKind>,
    pub teachers: TeacherAvailability,
}

impl Course {
    pub fn new(name: impl Into<String>, sessions: Vec<SessionKind>, teachers: TeacherAvailability) -> Self {
        Self {
            name: name.into(),
            sessions,
            teachers,
        }
    }

    pub fn num_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_label(&self, session: usize) -> String {
        format!("{} {}", self.name, self.sessions[session])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub name: String,
    pub slots: usize,
}

impl Day {
    pub fn new(name: impl Into<String>, slots: usize) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub groups: usize,
    pub days: Vec<Day>,
}

pub fn group_label(group: usize) -> String {
    format!("Group {}", group + 1)
}

impl Catalog {
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn slots_on(&self, day: usize) -> usize {
        self.days[day].slots
    }

    pub fn total_slots(&self) -> usize {
        self.days.iter().map(|d| d.slots).sum()
    }

    pub fn max_slots_per_day(&self) -> usize {
        self.days.iter().map(|d| d.slots).max().unwrap_or(0)
    }

    /// All (day, slot) pairs in chronological order.
    pub fn time_slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(d, day)| (0..day.slots).map(move |t| (d, t)))
    }

    /// Teachers eligible for `kind` sessions of `course`, falling back to the lecture set when the
    /// kind has no dedicated entry.
    pub fn eligible_teachers(&self, course: usize, kind: SessionKind) -> &[String] {
        let teachers = &self.courses[course].teachers;
        match teachers.by_kind.get(&kind.index()) {
            Some(set) => set.as_slice(),
            None => teachers.lecture_teachers(),
        }
    }

    /// The designated lecture teacher of a course.
    pub fn lecturer(&self, course: usize) -> Option<&str> {
        self.courses[course].teachers.lecture_teachers().first().map(String::as_str)
    }

    /// Rejects catalogs that cannot describe a valid instance.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.courses.is_empty() {
            return Err(ScheduleError::configuration("catalog has no courses"));
        }
        if self.days.is_empty() {
            return Err(ScheduleError::configuration("catalog has no days"));
        }
        if self.groups == 0 {
            return Err(ScheduleError::configuration("catalog has no groups"));
        }
        if let Some(day) = self.days.iter().find(|d| d.slots == 0) {
            return Err(ScheduleError::configuration(format!("day {} has no slots", day.name)));
        }

        let total_slots = self.total_slots();
        let mut names = HashSet::new();
        for course in &self.courses {
            if !names.insert(course.name.as_str()) {
                return Err(ScheduleError::configuration(format!(
                    "course name {} is used twice",
                    course.name
                )));
            }
            match course.sessions.first() {
                None => {
                    return Err(ScheduleError::configuration(format!(
                        "course {} offers no sessions",
                        course.name
                    )));
                }
                Some(kind) if !kind.is_lecture() => {
                    return Err(ScheduleError::configuration(format!(
                        "course {} must open with a lecture, found {kind}",
                        course.name
                    )));
                }
                Some(_) => {}
            }
            if course.sessions[1..].iter().any(|k| k.is_lecture()) {
                return Err(ScheduleError::configuration(format!(
                    "course {} has more than one lecture",
                    course.name
                )));
            }
            if course.num_sessions() > total_slots {
                return Err(ScheduleError::configuration(format!(
                    "course {} needs {} sessions but the week has {total_slots} slots",
                    course.name,
                    course.num_sessions()
                )));
            }
            for (kind_idx, teachers) in &course.teachers.by_kind {
                let offered = SessionKind::from_index(*kind_idx)
                    .is_some_and(|kind| course.sessions.contains(&kind));
                if !offered {
                    return Err(ScheduleError::configuration(format!(
                        "course {} lists teachers for session kind {kind_idx} it does not offer",
                        course.name
                    )));
                }
                if teachers.iter().any(|t| t.trim().is_empty()) {
                    return Err(ScheduleError::configuration(format!(
                        "course {} has a blank teacher name",
                        course.name
                    )));
                }
            }
        }
        Ok(())
    }
}
