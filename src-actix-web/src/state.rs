//! 应用状态

use std::sync::Arc;

use bunny_solver_core::Solver;

/// 所有 worker 共享的状态
#[derive(Clone)]
pub struct AppState {
    pub solver: Arc<dyn Solver>,
    /// webhook 注册的 API 组名
    pub group_name: Arc<str>,
}

impl AppState {
    pub fn new(solver: Arc<dyn Solver>, group_name: &str) -> Self {
        Self {
            solver,
            group_name: Arc::from(group_name),
        }
    }
}
