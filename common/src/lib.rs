//! 数据服务公共模块
//!
//! 包含各模块共享的基础设施：
//! - 配置加载
//! - 错误类型
//! - 统一响应格式
//! - 请求中间件

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;

// Re-export commonly used types
pub use config::{AppConfig, DatabaseConfig};
pub use errors::{AppError, AppResult};
pub use response::ApiResponse;
