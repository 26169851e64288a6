//! Server State

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::{JwtConfig, JwtService, password};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{admin_user, config as config_repo};
use shared::models::config_keys;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试场景用它注入
    /// 内存数据库
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (database/, uploads/images/, logs/)
    /// 2. 数据库 (work_dir/database/site.db) + 迁移
    /// 3. JWT 服务
    /// 4. 管理员账号、默认配置种子
    ///
    /// # Panics
    ///
    /// 数据库初始化失败、或生产环境缺少管理员密码时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("site.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let jwt_service = Arc::new(JwtService::new(JwtConfig::load(&PathBuf::from(
            &config.work_dir,
        ))));

        let state = Self::new(config.clone(), db_service.pool, jwt_service);

        state
            .seed_admin_account()
            .await
            .expect("Failed to seed admin account");
        state
            .seed_default_config()
            .await
            .expect("Failed to seed default config");

        state
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 首次启动时写入管理员账号
    ///
    /// 生产环境必须通过 ADMIN_PASSWORD 提供初始密码
    pub async fn seed_admin_account(&self) -> Result<(), String> {
        let password = match &self.config.admin_password {
            Some(p) => p.clone(),
            None if self.config.is_production() => {
                panic!("ADMIN_PASSWORD must be set in production");
            }
            None => {
                tracing::warn!(
                    "ADMIN_PASSWORD not set, using development default 'admin' — do not deploy like this"
                );
                "admin".to_string()
            }
        };

        let hash = password::hash_password(&password).map_err(|e| e.to_string())?;
        admin_user::ensure_account(&self.pool, &self.config.admin_username, &hash)
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// 写入缺失的默认配置 (不覆盖已有内容)
    pub async fn seed_default_config(&self) -> Result<(), String> {
        let defaults = [
            (
                config_keys::GENERAL_INFO,
                json!({ "site_name": "Consultório de Psicologia" }),
            ),
            (config_keys::MAINTENANCE_MODE, json!({ "is_enabled": false })),
        ];

        for (key, value) in defaults {
            let existing = config_repo::get(&self.pool, key)
                .await
                .map_err(|e| e.to_string())?;
            if existing.is_none() {
                config_repo::upsert(&self.pool, key, &value)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}
