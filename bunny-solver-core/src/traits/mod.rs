//! 抽象接口

mod client_factory;
mod secret_store;
mod solver;

pub use client_factory::{BunnyClientFactory, RecordClientFactory};
pub use secret_store::{SecretData, SecretStore};
pub use solver::Solver;
