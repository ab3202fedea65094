//! bunny.net DNS Provider

mod error;
mod http;
mod provider;
mod types;

use std::fmt;

use reqwest::Client;

pub(crate) use types::{BunnyDnsRecord, BunnyDnsZone, BunnyErrorResponse, NewDnsRecordRequest};

pub const BUNNY_API_BASE: &str = "https://api.bunny.net";

/// bunny.net 的记录类型编号，3 = TXT
pub const TXT_RECORD_TYPE: i32 = 3;

pub(crate) const ACCESS_KEY_HEADER: &str = "AccessKey";

/// bunny.net DNS Provider
pub struct BunnyProvider {
    pub(crate) client: Client,
    pub(crate) api_base: String,
    pub(crate) api_key: String,
}

impl BunnyProvider {
    /// 复用已有的 HTTP 客户端，并指定 API 地址（测试时指向 mock server）
    pub fn with_client(client: Client, api_base: impl Into<String>, api_key: String) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

impl fmt::Debug for BunnyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BunnyProvider")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}
