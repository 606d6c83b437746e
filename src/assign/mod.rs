//! Bulk assignment of issues to project boards, milestones, and due dates.

pub mod errors;
pub mod runner;

pub use errors::Error;
pub use runner::{RunReport, Runner};
