//! cert-manager webhook 请求/响应类型
//!
//! 对应 `acme.cert-manager.io/v1alpha1` 的 `ChallengePayload`。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `ChallengePayload` 的 apiVersion
pub const CHALLENGE_API_VERSION: &str = "acme.cert-manager.io/v1alpha1";
/// `ChallengePayload` 的 kind
pub const CHALLENGE_KIND: &str = "ChallengePayload";

/// 求解器要执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeAction {
    Present,
    CleanUp,
}

/// 单个 DNS-01 验证请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// 请求 UID，原样写回响应
    #[serde(default)]
    pub uid: String,
    pub action: ChallengeAction,
    /// 验证类型，目前只有 `dns-01`
    #[serde(rename = "type", default)]
    pub challenge_type: String,
    /// 要验证的域名
    #[serde(rename = "dnsName")]
    pub dns_name: String,
    /// TXT 记录的值
    pub key: String,
    /// 发起请求的资源所在命名空间
    #[serde(default)]
    pub resource_namespace: String,
    #[serde(rename = "resolvedFQDN", default)]
    pub resolved_fqdn: String,
    #[serde(default)]
    pub resolved_zone: String,
    #[serde(default)]
    pub allow_ambient_credentials: bool,
    /// 求解器配置（原始 JSON），可能为空
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// 求解结果的状态描述，失败时携带错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

/// 求解结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    #[serde(default)]
    pub uid: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChallengeStatus>,
}

impl ChallengeResponse {
    pub fn success(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            success: true,
            status: None,
        }
    }

    pub fn failure(uid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            success: false,
            status: Some(ChallengeStatus {
                status: Some("Failure".to_string()),
                message: Some(message.into()),
                reason: Some("InternalError".to_string()),
                code: Some(500),
            }),
        }
    }
}

/// webhook 请求/响应包装
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePayload {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<ChallengeRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ChallengeResponse>,
}

fn default_api_version() -> String {
    CHALLENGE_API_VERSION.to_string()
}

fn default_kind() -> String {
    CHALLENGE_KIND.to_string()
}
