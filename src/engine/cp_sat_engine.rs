//! OR-Tools CP-SAT backend.
use super::{SolveOutcome, SolveStatus, SolvingEngine};
use crate::config::SolverConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::instance::{Comparison, ProblemInstance, Solution, VarId};
use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};
use cp_sat::proto::{CpSolverStatus, SatParameters};
use log::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct CpSatEngine {
    config: SolverConfig,
}

impl CpSatEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    fn parameters(&self) -> SatParameters {
        let mut params = SatParameters::default();
        params.max_time_in_seconds = Some(self.config.time_limit_secs);
        params.max_deterministic_time = Some(self.config.time_limit_secs);
        params.num_search_workers = Some(self.config.num_workers);
        params.random_seed = Some(self.config.random_seed);
        params.log_search_progress = Some(self.config.log_search_progress);
        params
    }
}

fn linear(terms: &[(i64, VarId)], vars: &[BoolVar]) -> LinearExpr {
    let weighted: Vec<(i64, BoolVar)> = terms
        .iter()
        .map(|&(coef, var)| (coef, vars[var.index()].clone()))
        .collect();
    weighted.into_iter().collect()
}

impl SolvingEngine for CpSatEngine {
    fn solve(&self, instance: &ProblemInstance) -> ScheduleResult<SolveOutcome> {
        let mut model = CpModelBuilder::default();
        let vars: Vec<BoolVar> = (0..instance.num_vars()).map(|_| model.new_bool_var()).collect();

        for constraint in instance.constraints() {
            let lhs = linear(&constraint.terms, &vars);
            let rhs = LinearExpr::from(constraint.rhs);
            match constraint.cmp {
                Comparison::Le => model.add_le(lhs, rhs),
                Comparison::Ge => model.add_ge(lhs, rhs),
                Comparison::Eq => model.add_eq(lhs, rhs),
            };
        }
        model.maximize(linear(instance.objective(), &vars));

        debug!(
            "Handing {} variables and {} constraints to CP-SAT",
            vars.len(),
            instance.constraints().len()
        );
        let response = model.solve_with_parameters(&self.parameters());
        let status = match response.status() {
            CpSolverStatus::Optimal => SolveStatus::Optimal,
            CpSolverStatus::Feasible => SolveStatus::Feasible,
            CpSolverStatus::Infeasible => SolveStatus::Infeasible,
            CpSolverStatus::Unknown => SolveStatus::Unknown,
            CpSolverStatus::ModelInvalid => {
                return Err(ScheduleError::Engine("CP-SAT rejected the model as invalid".to_string()));
            }
        };
        info!("CP-SAT finished with status {status}");

        if !status.has_solution() {
            return Ok(SolveOutcome::unsolved(status));
        }
        let solution = Solution::new(vars.iter().map(|v| v.solution_value(&response)).collect());
        Ok(SolveOutcome::solved(status, solution, response.objective_value))
    }
}
