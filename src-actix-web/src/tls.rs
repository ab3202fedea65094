//! webhook 服务端 TLS

use std::path::Path;

use anyhow::Context;
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::ServerConfig;

/// 从 PEM 文件加载证书链和私钥
pub fn load_server_config(cert_file: &Path, key_file: &Path) -> anyhow::Result<ServerConfig> {
    let certs = CertificateDer::pem_file_iter(cert_file)
        .with_context(|| format!("读取证书失败: {}", cert_file.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("解析证书失败: {}", cert_file.display()))?;

    let key = PrivateKeyDer::from_pem_file(key_file)
        .with_context(|| format!("读取私钥失败: {}", key_file.display()))?;

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("证书与私钥不匹配")
}
