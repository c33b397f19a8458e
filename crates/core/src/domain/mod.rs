// Domain Layer - Pure entities and validation

pub mod company;
pub mod job;

// Re-exports
pub use company::Company;
pub use job::{Job, JobDetail, JobFilter, JobId, JobPatch, NewJob};
