use super::entities::User;
use serde::{Deserialize, Serialize};

/// 注册与修改用户时返回的消息和用户记录
#[derive(Debug, Serialize, Deserialize)]
pub struct UserMessageResponse {
    pub mensaje: String,
    pub usuario: User,
}
