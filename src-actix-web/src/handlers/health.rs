//! 健康检查

use actix_web::HttpResponse;

/// `/healthz`、`/livez`、`/readyz`
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}
