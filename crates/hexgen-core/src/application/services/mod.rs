//! Application services.

pub mod generator_service;

pub use generator_service::{
    GeneratorService, PlannedStep, RunReport, StepOutcome, StepReport,
};
