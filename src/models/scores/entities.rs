use serde::{Deserialize, Serialize};

/// 单个标准得分的取值范围
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Score {
    #[serde(rename = "ID_puntaje")]
    pub id: i64,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: i64,
    #[serde(rename = "id_criterio")]
    pub criterion_id: i64,
    #[serde(rename = "id_evaluacion")]
    pub evaluation_id: i64,
    #[serde(rename = "id_usuario")]
    pub owner_id: i64,
    #[serde(rename = "puntaje")]
    pub value: f64,
    #[serde(rename = "fecha_evaluacion")]
    pub scored_at: chrono::DateTime<chrono::Utc>,
}
