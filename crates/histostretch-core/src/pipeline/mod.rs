pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{analyze, run_batch, run_job, stretch, stretch_frame, stretch_with_progress};
pub use types::{Analysis, JobOutcome, StretchReport, StretchStage};
