//! Per-day constraints and the objective.
use super::model_context::ModelBuilderContext;
use crate::instance::{Comparison, ConstraintFamily};
use log::warn;

/// Every day hosts at least one non-lecture occurrence.
pub fn add_day_constraints<'a>(ctx: &mut ModelBuilderContext<'a>) {
    if !ctx.toggles().daily_variety {
        return;
    }
    let non_lectures = ctx.non_lecture_sessions();
    if non_lectures.is_empty() {
        // An empty sum can never reach 1; the rule has nothing to spread.
        warn!("Catalog has no recitations or labs, skipping the daily variety rule");
        return;
    }
    let catalog = ctx.catalog;
    for (d, day) in catalog.days.iter().enumerate() {
        let mut terms = Vec::new();
        for &(c, s) in &non_lectures {
            for t in 0..day.slots {
                terms.push((1, ctx.x(c, s, d, t)));
            }
        }
        ctx.add(ConstraintFamily::DailyVariety, terms, Comparison::Ge, 1);
    }
}

/// Maximise the number of scheduled non-lecture occurrences over the week.
pub fn add_objective<'a>(ctx: &mut ModelBuilderContext<'a>) {
    let non_lectures = ctx.non_lecture_sessions();
    let terms = ctx
        .catalog
        .time_slots()
        .flat_map(|(d, t)| non_lectures.iter().map(move |&(c, s)| (c, s, d, t)))
        .map(|(c, s, d, t)| (1, ctx.x(c, s, d, t)))
        .collect();
    ctx.instance.set_objective(terms);
}
