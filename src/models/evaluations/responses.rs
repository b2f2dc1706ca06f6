use serde::{Deserialize, Serialize};

use crate::models::scores::entities::Score;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareSummary {
    #[serde(rename = "ID_software")]
    pub id: i64,
    #[serde(rename = "nombre_software")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricSummary {
    pub id_rubrica: i64,
    pub nombre_rubrica: String,
}

// 完整评估：评估 + 软件摘要 + 评分表摘要 + 全部标准得分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteEvaluationBody {
    pub id_evaluacion: i64,
    pub puntaje_total: Option<f64>,
    pub promedio: Option<f64>,
    pub terminado: bool,
    pub fecha_evaluacion: chrono::DateTime<chrono::Utc>,
    pub software: SoftwareSummary,
    pub rubrica: RubricSummary,
    pub puntajes_criterio: Vec<Score>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteEvaluation {
    pub evaluacion: CompleteEvaluationBody,
}
