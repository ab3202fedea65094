//! 平台适配器

mod secret_store;

pub use secret_store::KubeSecretStore;
