use serde::{Deserialize, Serialize};

use crate::models::Owner;
use crate::models::questions::entities::CriterionWithQuestions;

// 分类下被评分表选中的标准
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricCategorySection {
    pub id_categoria: i64,
    #[serde(rename = "criterios")]
    pub criteria: Vec<CriterionWithQuestions>,
}

// 完整评分表：评分表 → 分类 → 标准 → 问题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRubric {
    #[serde(rename = "ID_rubrica")]
    pub id: i64,
    #[serde(rename = "nombre_rubrica")]
    pub name: String,
    #[serde(rename = "id_usuario")]
    pub owner: Owner,
    #[serde(rename = "criterios")]
    pub criterion_ids: Vec<i64>,
    #[serde(rename = "categorias")]
    pub categories: Vec<RubricCategorySection>,
}
