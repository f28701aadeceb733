//! Model building and constraint logic for the timetabling problem.

mod model_context;
mod model_days;
mod model_groups;
mod model_sessions;

pub use model_context::{ModelBuilderContext, build_model, build_model_pipeline};
use model_days::*;
use model_groups::*;
use model_sessions::*;
