use serde::Deserialize;

use crate::models::Owner;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRubricRequest {
    #[serde(rename = "nombre_rubrica")]
    pub name: String,
    #[serde(rename = "categorias", default)]
    pub category_ids: Vec<i64>,
    #[serde(rename = "criterios", default)]
    pub criterion_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRubricRequest {
    #[serde(rename = "nombre_rubrica")]
    pub name: Option<String>,
    #[serde(rename = "categorias")]
    pub category_ids: Option<Vec<i64>>,
    #[serde(rename = "criterios")]
    pub criterion_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone)]
pub struct NewRubric {
    pub name: String,
    pub owner: Owner,
    pub category_ids: Vec<i64>,
    pub criterion_ids: Vec<i64>,
}
