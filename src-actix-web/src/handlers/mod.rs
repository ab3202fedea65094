//! HTTP 处理模块

pub mod challenge;
pub mod discovery;
pub mod health;

use crate::error::ApiError;
use crate::state::AppState;

/// cert-manager webhook API 版本
pub const API_VERSION: &str = "v1alpha1";

impl AppState {
    /// 检查请求路径中的组名和求解器名是否属于本 webhook
    pub fn ensure_solver(&self, group: &str, solver: &str) -> Result<(), ApiError> {
        self.ensure_group(group)?;
        if solver != self.solver.name() {
            return Err(ApiError::SolverNotFound(solver.to_string()));
        }
        Ok(())
    }

    pub fn ensure_group(&self, group: &str) -> Result<(), ApiError> {
        if group != &*self.group_name {
            return Err(ApiError::GroupNotFound(group.to_string()));
        }
        Ok(())
    }
}
