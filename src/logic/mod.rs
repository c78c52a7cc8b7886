pub mod advisory_service;
pub mod calculations;
pub mod rules;

pub use advisory_service::{AdvisoryReport, AdvisoryService};
pub use rules::AdvisoryEngine;
