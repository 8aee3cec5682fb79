pub mod results;
mod stats;

pub use results::{CycleReport, RunReport, RunSummary};
pub use stats::{MeasurementAccum, Statistics};
