//! 业务服务

mod bunny_solver;
mod credential_service;
mod record_tracker;

pub use bunny_solver::{BunnySolver, SOLVER_NAME};
pub use credential_service::CredentialService;
pub use record_tracker::{RecordKey, RecordSlot, RecordTracker};
