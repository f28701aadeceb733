//! Per-session constraints: occurrence, attendance and how groups share an occurrence.
use super::model_context::ModelBuilderContext;
use crate::instance::{Comparison, ConstraintFamily};

/// Add session occurrence, full attendance, single-group, lecture joint attendance and the
/// occurrence link constraints.
pub fn add_session_constraints<'a>(ctx: &mut ModelBuilderContext<'a>) {
    let catalog = ctx.catalog;
    let groups = catalog.groups;

    // Non-initial sessions must occur somewhere in the week. Session 0 is forced by the lecture
    // joint rule combined with full attendance, given at least one group.
    if ctx.toggles().session_occurs {
        for (c, course) in catalog.courses.iter().enumerate() {
            for s in 1..course.num_sessions() {
                let terms = ctx.session_in_week(c, s);
                ctx.add(ConstraintFamily::SessionOccurs, terms, Comparison::Ge, 1);
            }
        }
    }

    // Every group attends every session exactly once.
    for (c, course) in catalog.courses.iter().enumerate() {
        for s in 0..course.num_sessions() {
            for g in 0..groups {
                let terms = catalog
                    .time_slots()
                    .map(|(d, t)| (1, ctx.z(c, s, d, t, g)))
                    .collect();
                ctx.add(ConstraintFamily::FullAttendance, terms, Comparison::Eq, 1);
            }
        }
    }

    let non_lectures = ctx.non_lecture_sessions();

    // A non-lecture occurrence serves at most one group.
    if ctx.toggles().single_group {
        for &(c, s) in &non_lectures {
            for (d, t) in catalog.time_slots() {
                let terms = (0..groups).map(|g| (1, ctx.z(c, s, d, t, g))).collect();
                ctx.add(ConstraintFamily::SingleGroup, terms, Comparison::Le, 1);
            }
        }
    }

    // Lectures are all-or-nothing across the group set: Z - X == 0.
    for c in 0..catalog.courses.len() {
        for (d, t) in catalog.time_slots() {
            let x = ctx.x(c, 0, d, t);
            for g in 0..groups {
                let terms = vec![(1, ctx.z(c, 0, d, t, g)), (-1, x)];
                ctx.add(ConstraintFamily::LectureJoint, terms, Comparison::Eq, 0);
            }
        }
    }

    // Non-lecture attendance only happens at scheduled occurrences: Z - X <= 0. A scheduled
    // occurrence may still go unattended.
    for &(c, s) in &non_lectures {
        for (d, t) in catalog.time_slots() {
            let x = ctx.x(c, s, d, t);
            for g in 0..groups {
                let z = ctx.z(c, s, d, t, g);
                ctx.add(ConstraintFamily::OccurrenceLink, vec![(1, z), (-1, x)], Comparison::Le, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Course, Day, SessionKind, TeacherAvailability};
    use crate::config::{ConstraintToggles, ModelOptions};
    use crate::instance::{Comparison, ConstraintFamily};
    use crate::model::{ModelBuilderContext, build_model, build_model_pipeline};

    fn catalog() -> Catalog {
        Catalog {
            courses: vec![
                Course::new(
                    "Net",
                    vec![SessionKind::Lecture, SessionKind::Recitation, SessionKind::Lab],
                    TeacherAvailability::default(),
                ),
                Course::new("Law", vec![SessionKind::Lecture], TeacherAvailability::default()),
            ],
            groups: 3,
            days: vec![Day::new("Mon", 2), Day::new("Tue", 1)],
        }
    }

    #[test]
    fn family_sizes_match_catalog_shape() {
        let inst = build_model(&catalog(), ModelOptions::default()).unwrap();
        let count = |f| inst.constraints_of(f).count();
        // Two non-initial sessions.
        assert_eq!(count(ConstraintFamily::SessionOccurs), 2);
        // 4 sessions * 3 groups.
        assert_eq!(count(ConstraintFamily::FullAttendance), 12);
        // 2 non-lecture sessions * 3 slots.
        assert_eq!(count(ConstraintFamily::SingleGroup), 6);
        // 2 lectures * 3 slots * 3 groups.
        assert_eq!(count(ConstraintFamily::LectureJoint), 18);
        // 2 non-lecture sessions * 3 slots * 3 groups.
        assert_eq!(count(ConstraintFamily::OccurrenceLink), 18);
    }

    #[test]
    fn attendance_sums_span_every_slot() {
        let inst = build_model(&catalog(), ModelOptions::default()).unwrap();
        for c in inst.constraints_of(ConstraintFamily::FullAttendance) {
            assert_eq!(c.terms.len(), 3);
            assert_eq!(c.rhs, 1);
        }
    }

    #[test]
    fn lecture_only_course_has_no_single_group_rule() {
        let mut cat = catalog();
        cat.courses.truncate(1);
        cat.courses[0].sessions.truncate(1);
        let inst = build_model(&cat, ModelOptions::default()).unwrap();
        assert_eq!(inst.constraints_of(ConstraintFamily::SingleGroup).count(), 0);
        assert_eq!(inst.constraints_of(ConstraintFamily::SessionOccurs).count(), 0);
        assert_eq!(inst.constraints_of(ConstraintFamily::OccurrenceLink).count(), 0);
    }

    #[test]
    fn occurrence_link_only_bounds_attendance() {
        let inst = build_model(&catalog(), ModelOptions::default()).unwrap();
        for c in inst.constraints_of(ConstraintFamily::OccurrenceLink) {
            assert_eq!(c.terms.len(), 2);
            assert_eq!((c.terms[0].0, c.terms[1].0), (1, -1));
            assert_eq!((c.cmp, c.rhs), (Comparison::Le, 0));
        }
    }

    #[test]
    fn toggles_drop_optional_families() {
        let toggles = ConstraintToggles {
            session_occurs: false,
            single_group: false,
            ..ConstraintToggles::default()
        };
        let cat = catalog();
        let ctx = ModelBuilderContext::new_with_toggles(&cat, toggles).unwrap();
        let inst = build_model_pipeline(ctx);
        assert_eq!(inst.constraints_of(ConstraintFamily::SessionOccurs).count(), 0);
        assert_eq!(inst.constraints_of(ConstraintFamily::SingleGroup).count(), 0);
        assert_eq!(inst.constraints_of(ConstraintFamily::FullAttendance).count(), 12);
    }
}
