//! bunny.net HTTP 请求方法
//!
//! 所有请求都带 `AccessKey`；发送失败或读不到响应体时返回 `NetworkError`，
//! 收到非 2xx 响应时按状态码映射错误。

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ACCESS_KEY_HEADER, BunnyErrorResponse, BunnyProvider};

impl BunnyProvider {
    fn request(&self, method: Method, path: &str) -> (RequestBuilder, String) {
        let url = format!("{}{path}", self.api_base);
        let builder = self
            .client
            .request(method, &url)
            .header("accept", "application/json")
            .header(ACCESS_KEY_HEADER, &self.api_key);
        (builder, url)
    }

    /// 发送请求，返回 (状态码, 响应文本)，状态码由调用方检查
    async fn execute(&self, request: RequestBuilder, method: &str, url: &str) -> Result<(u16, String)> {
        log::debug!("[bunny] {method} {url}");

        let response = request
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status().as_u16();
        log::debug!("[bunny] Response Status: {status}");

        let text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response body: {e}")))?;
        log::debug!("[bunny] Response Body: {text}");

        Ok((status, text))
    }

    /// 执行 GET 请求并解析 JSON
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, ctx: ErrorContext) -> Result<T> {
        let (request, url) = self.request(Method::GET, path);

        let (status, text) = self.execute(request, "GET", &url).await?;
        self.check_status(status, &text, ctx)?;

        serde_json::from_str(&text).map_err(|e| {
            log::error!("[bunny] JSON 解析失败: {e}, 原始响应: {text}");
            self.parse_error(e)
        })
    }

    /// 执行 PUT 请求，返回响应文本
    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<String> {
        let payload = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;

        let (request, url) = self.request(Method::PUT, path);
        log::debug!("PUT {url} Body: {payload}");
        let request = request
            .header("content-type", "application/json")
            .body(payload);

        let (status, text) = self.execute(request, "PUT", &url).await?;
        self.check_status(status, &text, ctx)?;

        Ok(text)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        let (request, url) = self.request(Method::DELETE, path);

        let (status, text) = self.execute(request, "DELETE", &url).await?;
        self.check_status(status, &text, ctx)
    }

    /// 非 2xx 响应转换为错误
    fn check_status(&self, status: u16, body: &str, ctx: ErrorContext) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let message = match serde_json::from_str::<BunnyErrorResponse>(body) {
            Ok(BunnyErrorResponse {
                message: Some(message),
                error_key,
            }) => match error_key {
                Some(key) => format!("{key}: {message}"),
                None => message,
            },
            _ if body.is_empty() => format!("HTTP {status}"),
            _ => format!("HTTP {status}: {body}"),
        };

        log::error!("API 错误: {status} - {message}");
        Err(self.map_error(RawApiError::with_code(status.to_string(), message), ctx))
    }
}
