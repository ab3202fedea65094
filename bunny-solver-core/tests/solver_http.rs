//! 求解器端到端测试：内存 secret + wiremock 模拟的 bunny.net API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bunny_solver_core::types::{ChallengeAction, ChallengeRequest};
use bunny_solver_core::{
    BunnyClientFactory, BunnySolver, CoreError, SecretData, SecretStore, SecretStoreError, Solver,
};

struct FixedSecretStore;

#[async_trait]
impl SecretStore for FixedSecretStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<SecretData, SecretStoreError> {
        if (namespace, name) != ("cert-manager", "bunny-credentials") {
            return Err(SecretStoreError::NotFound);
        }
        Ok([("api-key", "test-key"), ("zone-id", "4242")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
            .collect())
    }
}

fn solver(server: &MockServer) -> BunnySolver {
    let factory = BunnyClientFactory::new(server.uri(), Duration::from_secs(5)).unwrap();
    let solver = BunnySolver::new(Arc::new(factory));
    solver.initialize(Arc::new(FixedSecretStore)).unwrap();
    solver
}

fn challenge(dns_name: &str, key: &str) -> ChallengeRequest {
    ChallengeRequest {
        uid: "6a4e4f4b".to_string(),
        action: ChallengeAction::Present,
        challenge_type: "dns-01".to_string(),
        dns_name: dns_name.to_string(),
        key: key.to_string(),
        resource_namespace: "cert-manager".to_string(),
        resolved_fqdn: format!("_acme-challenge.{dns_name}."),
        resolved_zone: format!("{dns_name}."),
        allow_ambient_credentials: false,
        config: Some(json!({ "secretRef": "bunny-credentials" })),
    }
}

#[tokio::test]
async fn test_present_sends_one_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dnszone/4242/records"))
        .and(header("AccessKey", "test-key"))
        .and(body_partial_json(json!({
            "Type": 3,
            "Name": "example.com",
            "Value": "challenge-token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Id": 555 })))
        .expect(1)
        .mount(&server)
        .await;

    solver(&server)
        .present(&challenge("example.com", "challenge-token"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_present_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dnszone/4242/records"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let solver = solver(&server);
    let err = solver
        .present(&challenge("example.com", "challenge-token"))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Provider(_)));
    assert_eq!(solver.tracked_records().await, 0);
}

#[tokio::test]
async fn test_cleanup_deletes_record_created_by_present() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dnszone/4242/records"))
        .and(body_partial_json(json!({ "Value": "token-a" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": 111 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/dnszone/4242/records"))
        .and(body_partial_json(json!({ "Value": "token-b" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": 222 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dnszone/4242/records/111"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dnszone/4242/records/222"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let solver = solver(&server);
    let a = challenge("example.com", "token-a");
    let b = challenge("example.com", "token-b");

    let (ra, rb) = tokio::join!(solver.present(&a), solver.present(&b));
    ra.unwrap();
    rb.unwrap();

    let (ca, cb) = tokio::join!(solver.cleanup(&b), solver.cleanup(&a));
    ca.unwrap();
    cb.unwrap();

    assert_eq!(solver.tracked_records().await, 0);
}

#[tokio::test]
async fn test_cleanup_looks_up_untracked_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dnszone/4242"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": 4242,
            "Domain": "example.com",
            "Records": [
                { "Id": 9, "Type": 3, "Name": "example.com", "Value": "other" },
                { "Id": 10, "Type": 3, "Name": "example.com", "Value": "challenge-token" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dnszone/4242/records/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    solver(&server)
        .cleanup(&challenge("example.com", "challenge-token"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cleanup_tolerates_missing_record() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": 77 })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dnszone/4242/records/77"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let solver = solver(&server);
    let req = challenge("example.com", "challenge-token");
    solver.present(&req).await.unwrap();

    solver.cleanup(&req).await.unwrap();
}

#[tokio::test]
async fn test_cleanup_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": 77 })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let solver = solver(&server);
    let req = challenge("example.com", "challenge-token");
    solver.present(&req).await.unwrap();

    let err = solver.cleanup(&req).await.unwrap_err();

    assert!(matches!(err, CoreError::Provider(_)));
    // 保留跟踪，重试时还能删除同一条记录
    assert_eq!(solver.tracked_records().await, 1);
}

#[tokio::test]
async fn test_overlapping_presents_create_one_record() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dnszone/4242/records"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "Id": 333 }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dnszone/4242/records/333"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let solver = solver(&server);
    let req = challenge("example.com", "challenge-token");

    // 第一次 PUT 未返回时 cert-manager 重试
    let (first, retry) = tokio::join!(solver.present(&req), solver.present(&req));
    first.unwrap();
    retry.unwrap();
    assert_eq!(solver.tracked_records().await, 1);

    solver.cleanup(&req).await.unwrap();
    assert_eq!(solver.tracked_records().await, 0);
}
