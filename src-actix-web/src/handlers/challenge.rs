//! 验证请求处理
//!
//! cert-manager 以 `create` 的方式 POST `ChallengePayload`，
//! 求解结果写回 `response` 字段后原样返回。

use actix_web::{web, HttpResponse};

use bunny_solver_core::types::{ChallengeAction, ChallengePayload, ChallengeResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /apis/{group}/v1alpha1/{solver}`
pub async fn solve(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    payload: web::Json<ChallengePayload>,
) -> Result<HttpResponse, ApiError> {
    let (group, solver) = path.into_inner();
    state.ensure_solver(&group, &solver)?;

    run(&state, payload.into_inner()).await
}

/// `POST /apis/{group}/v1alpha1/namespaces/{namespace}/{solver}`
pub async fn solve_namespaced(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    payload: web::Json<ChallengePayload>,
) -> Result<HttpResponse, ApiError> {
    let (group, _namespace, solver) = path.into_inner();
    state.ensure_solver(&group, &solver)?;

    run(&state, payload.into_inner()).await
}

async fn run(state: &AppState, mut payload: ChallengePayload) -> Result<HttpResponse, ApiError> {
    let request = payload
        .request
        .as_ref()
        .ok_or_else(|| ApiError::BadRequest("ChallengePayload.request is required".to_string()))?;

    tracing::debug!(
        "收到验证请求: {:?} {} (uid {})",
        request.action,
        request.dns_name,
        request.uid
    );

    let result = match request.action {
        ChallengeAction::Present => state.solver.present(request).await,
        ChallengeAction::CleanUp => state.solver.cleanup(request).await,
    };

    let response = match result {
        Ok(()) => {
            tracing::info!("{:?} {} 完成", request.action, request.dns_name);
            ChallengeResponse::success(&request.uid)
        }
        Err(e) => {
            tracing::error!("{:?} {} 失败: {}", request.action, request.dns_name, e);
            ChallengeResponse::failure(&request.uid, e.to_string())
        }
    };

    payload.response = Some(response);
    Ok(HttpResponse::Created().json(payload))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    use bunny_solver_core::types::ChallengeRequest;
    use bunny_solver_core::{CoreError, CoreResult, SecretStore, Solver};

    use crate::state::AppState;

    const GROUP: &str = "acme.example.com";

    /// 记录调用的求解器，`fail` 为真时返回凭证错误
    #[derive(Default)]
    struct RecordingSolver {
        fail: bool,
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Solver for RecordingSolver {
        fn name(&self) -> &'static str {
            "bunny"
        }

        fn initialize(&self, _secret_store: Arc<dyn SecretStore>) -> CoreResult<()> {
            Ok(())
        }

        async fn present(&self, request: &ChallengeRequest) -> CoreResult<()> {
            self.record("present", request).await
        }

        async fn cleanup(&self, request: &ChallengeRequest) -> CoreResult<()> {
            self.record("cleanup", request).await
        }
    }

    impl RecordingSolver {
        async fn record(&self, action: &str, request: &ChallengeRequest) -> CoreResult<()> {
            self.calls
                .lock()
                .await
                .push((action.to_string(), request.dns_name.clone()));
            if self.fail {
                return Err(CoreError::MissingSecretField {
                    field: "api-key".to_string(),
                    namespace: "default".to_string(),
                    name: "bunny".to_string(),
                });
            }
            Ok(())
        }
    }

    fn payload(action: &str) -> Value {
        json!({
            "apiVersion": "acme.cert-manager.io/v1alpha1",
            "kind": "ChallengePayload",
            "request": {
                "uid": "uid-123",
                "action": action,
                "type": "dns-01",
                "dnsName": "example.com",
                "key": "token",
                "resourceNamespace": "default",
                "resolvedFQDN": "_acme-challenge.example.com.",
                "resolvedZone": "example.com.",
                "allowAmbientCredentials": false,
                "config": { "secretRef": "bunny" }
            }
        })
    }

    macro_rules! app {
        ($solver:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($solver, GROUP)))
                    .configure(crate::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_present_success() {
        let solver = Arc::new(RecordingSolver::default());
        let app = app!(solver.clone());

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/bunny")
            .set_json(payload("Present"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"]["uid"], "uid-123");
        assert_eq!(body["response"]["success"], true);
        assert_eq!(body["request"]["dnsName"], "example.com");

        let calls = solver.calls.lock().await;
        assert_eq!(calls.as_slice(), &[("present".to_string(), "example.com".to_string())]);
    }

    #[actix_web::test]
    async fn test_cleanup_on_namespaced_path() {
        let solver = Arc::new(RecordingSolver::default());
        let app = app!(solver.clone());

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/namespaces/default/bunny")
            .set_json(payload("CleanUp"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let calls = solver.calls.lock().await;
        assert_eq!(calls[0].0, "cleanup");
    }

    #[actix_web::test]
    async fn test_solver_failure_is_reported_in_response() {
        let solver = Arc::new(RecordingSolver {
            fail: true,
            ..Default::default()
        });
        let app = app!(solver);

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/bunny")
            .set_json(payload("Present"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"]["success"], false);
        let message = body["response"]["status"]["message"].as_str().unwrap();
        assert!(message.contains("'api-key'"));
        assert!(message.contains("'default/bunny'"));
    }

    #[actix_web::test]
    async fn test_unknown_group() {
        let app = app!(Arc::new(RecordingSolver::default()));

        let req = test::TestRequest::post()
            .uri("/apis/other.example.com/v1alpha1/bunny")
            .set_json(payload("Present"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["reason"], "NotFound");
    }

    #[actix_web::test]
    async fn test_unknown_solver() {
        let solver = Arc::new(RecordingSolver::default());
        let app = app!(solver.clone());

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/cloudflare")
            .set_json(payload("Present"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(solver.calls.lock().await.is_empty());
    }

    #[actix_web::test]
    async fn test_missing_request() {
        let app = app!(Arc::new(RecordingSolver::default()));

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/bunny")
            .set_json(json!({ "apiVersion": "acme.cert-manager.io/v1alpha1", "kind": "ChallengePayload" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_action() {
        let app = app!(Arc::new(RecordingSolver::default()));

        let req = test::TestRequest::post()
            .uri("/apis/acme.example.com/v1alpha1/bunny")
            .set_json(payload("Renew"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["reason"], "BadRequest");
    }

    #[actix_web::test]
    async fn test_discovery() {
        let app = app!(Arc::new(RecordingSolver::default()));

        let req = test::TestRequest::get()
            .uri("/apis/acme.example.com/v1alpha1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["groupVersion"], "acme.example.com/v1alpha1");
        assert_eq!(body["resources"][0]["name"], "bunny");
        assert_eq!(body["resources"][0]["verbs"], json!(["create"]));

        let req = test::TestRequest::get().uri("/apis").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["groups"][0]["name"], GROUP);
    }

    #[actix_web::test]
    async fn test_healthz() {
        let app = app!(Arc::new(RecordingSolver::default()));

        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "ok");
    }
}
