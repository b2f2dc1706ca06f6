use serde::{Deserialize, Serialize};

use crate::models::Owner;

/// 通用评分表的保留编号，任何人都可以读取
pub const GENERAL_RUBRIC_ID: i64 = 0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    #[serde(rename = "ID_rubrica")]
    pub id: i64,
    #[serde(rename = "nombre_rubrica")]
    pub name: String,
    #[serde(rename = "id_usuario")]
    pub owner: Owner,
    /// 按顺序排列的分类编号
    #[serde(rename = "categorias")]
    pub category_ids: Vec<i64>,
    /// 选中的标准编号
    #[serde(rename = "criterios")]
    pub criterion_ids: Vec<i64>,
}

impl Rubric {
    pub fn is_general(&self) -> bool {
        self.id == GENERAL_RUBRIC_ID
    }
}
