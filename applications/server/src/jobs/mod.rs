/// Background jobs
pub mod seeder;

pub use seeder::{ReloadReport, SeedFailure, SeedJob, SeedQueue};
