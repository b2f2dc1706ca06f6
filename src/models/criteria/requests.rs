use serde::Deserialize;

use crate::models::Owner;
use crate::policy::UpdateIntent;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCriterionRequest {
    #[serde(rename = "nombre_criterio")]
    pub name: String,
    #[serde(rename = "id_categoria")]
    pub category_id: i64,
    /// 省略时归属于调用者
    #[serde(rename = "id_usuario")]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCriterionRequest {
    #[serde(rename = "nombre_criterio")]
    pub name: Option<String>,
    #[serde(rename = "id_categoria")]
    pub category_id: Option<i64>,
    #[serde(rename = "id_usuario")]
    pub owner: Option<Owner>,
}

impl UpdateCriterionRequest {
    /// 根据请求中出现的字段判断更新意图
    pub fn intent(&self) -> UpdateIntent {
        if self.name.is_none() && self.owner.is_none() {
            UpdateIntent::CategoryOnly
        } else {
            UpdateIntent::Full
        }
    }
}

// 已确定归属的新标准（存储层输入）
#[derive(Debug, Clone)]
pub struct NewCriterion {
    pub name: String,
    pub category_id: i64,
    pub owner: Owner,
}
