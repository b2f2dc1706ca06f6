use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::rubrics::entities::GENERAL_RUBRIC_ID;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 检查通用评分表是否存在
/// 迁移会写入 0 号评分表，缺失时只告警不阻止启动
async fn check_general_rubric(storage: &Arc<dyn Storage>) {
    match storage.get_rubric_by_id(GENERAL_RUBRIC_ID).await {
        Ok(Some(rubric)) => info!("General rubric available: {}", rubric.name),
        Ok(None) => warn!("General rubric (id 0) is missing, anonymous rubric reads will 404"),
        Err(e) => warn!("Failed to look up general rubric: {}", e),
    }
}

async fn log_user_count(storage: &Arc<dyn Storage>) {
    match storage.list_users().await {
        Ok(users) if users.is_empty() => {
            warn!("No users registered yet, register an administrator via /usuarios/registro")
        }
        Ok(users) => info!("{} user(s) registered", users.len()),
        Err(e) => warn!("Failed to count users: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 连接存储并执行迁移
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    check_general_rubric(&storage).await;
    log_user_count(&storage).await;

    Ok(StartupContext { storage })
}
