//! Per-group constraints: one session at a time and a cap on consecutive slots.
use super::model_context::ModelBuilderContext;
use crate::instance::{Comparison, ConstraintFamily, VarId};

/// Add group exclusivity and consecutive-load constraints.
pub fn add_group_constraints<'a>(ctx: &mut ModelBuilderContext<'a>) {
    let catalog = ctx.catalog;
    let toggles = ctx.toggles();

    if toggles.group_exclusivity {
        for g in 0..catalog.groups {
            for (d, t) in catalog.time_slots() {
                let terms = attended_at(ctx, g, d, t);
                ctx.add(ConstraintFamily::GroupExclusivity, terms, Comparison::Le, 1);
            }
        }
    }

    // A group never sits through more than `cap` consecutive slots: any `cap + 1` window holds at
    // most `cap` attendances. Only days longer than the window are constrained.
    let Some(cap) = ctx.options.max_consecutive_slots else {
        return;
    };
    if !toggles.consecutive_load {
        return;
    }
    let window = cap + 1;
    for g in 0..catalog.groups {
        for (d, day) in catalog.days.iter().enumerate() {
            if day.slots <= window {
                continue;
            }
            for start in 0..=(day.slots - window) {
                let terms = (start..start + window)
                    .flat_map(|t| attended_at(ctx, g, d, t))
                    .collect();
                ctx.add(ConstraintFamily::ConsecutiveLoad, terms, Comparison::Le, cap as i64);
            }
        }
    }
}

/// `Z` terms of every session group `g` could attend at (day, slot).
fn attended_at(ctx: &ModelBuilderContext<'_>, g: usize, d: usize, t: usize) -> Vec<(i64, VarId)> {
    let mut terms = Vec::new();
    for (c, course) in ctx.catalog.courses.iter().enumerate() {
        for s in 0..course.num_sessions() {
            terms.push((1, ctx.z(c, s, d, t, g)));
        }
    }
    terms
}
