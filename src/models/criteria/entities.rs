use serde::{Deserialize, Serialize};

use crate::models::Owner;

// 评价标准，隶属于某个分类
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Criterion {
    #[serde(rename = "ID_criterio")]
    pub id: i64,
    #[serde(rename = "nombre_criterio")]
    pub name: String,
    #[serde(rename = "id_categoria")]
    pub category_id: i64,
    #[serde(rename = "id_usuario")]
    pub owner: Owner,
}
