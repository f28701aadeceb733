//! Weekly course timetabling: encodes courses, sessions, groups and slots as a boolean constraint
//! model, hands it to a solving engine, decodes the answer into a timetable and staffs it with
//! teachers under a least-load policy.

pub mod catalog;
pub mod config;
pub mod decode;
pub mod demo;
pub mod engine;
pub mod error;
pub mod instance;
pub mod model;
pub mod pipeline;
pub mod teachers;

pub use catalog::{Catalog, Course, Day, SessionKind, TeacherAvailability};
pub use config::{ConstraintToggles, ModelOptions, SolverConfig};
pub use decode::{Entry, Timetable, decode};
#[cfg(feature = "cp-sat")]
pub use engine::CpSatEngine;
pub use engine::{SolveOutcome, SolveStatus, SolvingEngine};
pub use error::{ScheduleError, ScheduleResult};
pub use instance::{ProblemInstance, Solution};
pub use model::build_model;
pub use pipeline::{Schedule, diagnose_infeasibility, schedule};
pub use teachers::{TeacherAssignment, TeacherRecord, assign_teachers};
