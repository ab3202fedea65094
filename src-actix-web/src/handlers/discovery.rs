//! API 发现
//!
//! kube-apiserver 通过这些接口确认聚合 API 提供了求解器资源。

use actix_web::{web, HttpResponse};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    APIGroup, APIGroupList, APIResource, APIResourceList, GroupVersionForDiscovery,
};

use crate::error::ApiError;
use crate::state::AppState;

use super::API_VERSION;

fn group_version(group: &str) -> GroupVersionForDiscovery {
    GroupVersionForDiscovery {
        group_version: format!("{group}/{API_VERSION}"),
        version: API_VERSION.to_string(),
    }
}

fn api_group(group: &str) -> APIGroup {
    APIGroup {
        name: group.to_string(),
        preferred_version: Some(group_version(group)),
        versions: vec![group_version(group)],
        ..Default::default()
    }
}

/// `GET /apis`
pub async fn list_groups(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(APIGroupList {
        groups: vec![api_group(&state.group_name)],
    })
}

/// `GET /apis/{group}`
pub async fn get_group(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let group = path.into_inner();
    state.ensure_group(&group)?;

    Ok(HttpResponse::Ok().json(api_group(&group)))
}

/// `GET /apis/{group}/v1alpha1`
pub async fn list_resources(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let group = path.into_inner();
    state.ensure_group(&group)?;

    let solver = state.solver.name();
    Ok(HttpResponse::Ok().json(APIResourceList {
        group_version: format!("{group}/{API_VERSION}"),
        resources: vec![APIResource {
            name: solver.to_string(),
            singular_name: solver.to_string(),
            namespaced: false,
            kind: "ChallengePayload".to_string(),
            verbs: vec!["create".to_string()],
            ..Default::default()
        }],
    }))
}
