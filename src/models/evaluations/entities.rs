use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    #[serde(rename = "ID_evaluacion")]
    pub id: i64,
    #[serde(rename = "id_software")]
    pub software_id: i64,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: i64,
    #[serde(rename = "id_usuario")]
    pub owner_id: i64,
    #[serde(rename = "puntaje_total")]
    pub total_score: Option<f64>,
    #[serde(rename = "promedio")]
    pub average: Option<f64>,
    /// 完成后所有者不能再修改
    #[serde(rename = "terminado")]
    pub completed: bool,
    #[serde(rename = "fecha_evaluacion")]
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}
