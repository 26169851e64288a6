//! 认证模块
//!
//! JWT + Argon2 认证体系：
//! - [`jwt`]: 令牌生成与验证
//! - [`middleware`]: Bearer 认证中间件
//! - [`password`]: 密码哈希

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;

use serde::{Deserialize, Serialize};

/// Authenticated admin, injected into request extensions by the middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub.parse().unwrap_or(0),
            username: claims.username,
        }
    }
}
