//! bunny.net API 类型定义
//!
//! bunny.net 的 JSON 字段使用 PascalCase。

use serde::{Deserialize, Serialize};

/// 创建记录请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewDnsRecordRequest<'a> {
    pub id: i64,
    #[serde(rename = "Type")]
    pub record_type: i32,
    pub value: &'a str,
    pub name: &'a str,
}

/// DNS 记录
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyDnsRecord {
    pub id: i64,
    #[serde(rename = "Type", default)]
    pub record_type: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// DNS Zone，`GET /dnszone/{id}` 的响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyDnsZone {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub records: Vec<BunnyDnsRecord>,
}

/// 错误响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyErrorResponse {
    pub error_key: Option<String>,
    pub message: Option<String>,
}
