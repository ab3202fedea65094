//! bunny.net DNS API 客户端
//!
//! 只覆盖 DNS-01 验证需要的几个接口：创建 TXT 记录、删除记录、按名称和值查找记录。
//!
//! ```ignore
//! use bunny_dns_provider::{BUNNY_API_BASE, BunnyProvider, DnsRecordClient, TxtRecord};
//!
//! let provider = BunnyProvider::with_client(reqwest::Client::new(), BUNNY_API_BASE, "api-key".to_string());
//! let record = TxtRecord::new(42, "_acme-challenge.example.com", "token");
//! let id = provider.create_txt_record(12345, &record).await?;
//! provider.delete_record(12345, id).await?;
//! ```

mod bunny;
mod error;
mod traits;
mod types;

pub use bunny::{BUNNY_API_BASE, BunnyProvider, TXT_RECORD_TYPE};
pub use error::{CredentialError, ProviderError, Result};
pub use traits::{DnsRecordClient, ErrorContext, ProviderErrorMapper, RawApiError};
pub use types::{API_KEY_FIELD, ProviderCredentials, TxtRecord, ZONE_ID_FIELD};
