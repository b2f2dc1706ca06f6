use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluationRequest {
    #[serde(rename = "id_software")]
    pub software_id: i64,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: i64,
    #[serde(rename = "puntaje_total")]
    pub total_score: Option<f64>,
    #[serde(rename = "promedio")]
    pub average: Option<f64>,
    #[serde(rename = "terminado", default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvaluationRequest {
    #[serde(rename = "id_software")]
    pub software_id: Option<i64>,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: Option<i64>,
    #[serde(rename = "puntaje_total")]
    pub total_score: Option<f64>,
    #[serde(rename = "promedio")]
    pub average: Option<f64>,
    #[serde(rename = "terminado")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub software_id: i64,
    pub rubric_id: i64,
    pub owner_id: i64,
    pub total_score: Option<f64>,
    pub average: Option<f64>,
    pub completed: bool,
}
