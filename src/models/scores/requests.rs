use serde::Deserialize;

use crate::models::Owner;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScoreRequest {
    #[serde(rename = "id_rubrica")]
    pub rubric_id: i64,
    #[serde(rename = "id_criterio")]
    pub criterion_id: i64,
    #[serde(rename = "id_evaluacion")]
    pub evaluation_id: i64,
    #[serde(rename = "puntaje")]
    pub value: f64,
    /// 匿名创建时必须提供
    #[serde(rename = "id_usuario")]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScoreRequest {
    #[serde(rename = "id_rubrica")]
    pub rubric_id: Option<i64>,
    #[serde(rename = "id_criterio")]
    pub criterion_id: Option<i64>,
    #[serde(rename = "id_evaluacion")]
    pub evaluation_id: Option<i64>,
    #[serde(rename = "puntaje")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewScore {
    pub rubric_id: i64,
    pub criterion_id: i64,
    pub evaluation_id: i64,
    pub owner_id: i64,
    pub value: f64,
}
