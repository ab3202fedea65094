//! bunny.net DNS-01 求解器核心
//!
//! 与运行平台无关：secret 读取通过 [`traits::SecretStore`] 注入，
//! DNS 记录操作通过 [`traits::RecordClientFactory`] 创建。

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

pub use error::{CoreError, CoreResult, SecretStoreError};
pub use services::{BunnySolver, SOLVER_NAME};
pub use traits::{BunnyClientFactory, RecordClientFactory, SecretData, SecretStore, Solver};

pub use bunny_dns_provider::BUNNY_API_BASE;
