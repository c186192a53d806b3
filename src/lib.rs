pub mod configuration;
pub mod cross_check;
pub mod domain;
pub mod generator;
pub mod report;
pub mod sampling;
pub mod telemetry;
pub mod utils;

pub use generator::{FixtureGenerator, GenerationError, generate_test_emails};
