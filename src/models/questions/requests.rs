use serde::Deserialize;

use crate::models::Owner;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "id_criterio")]
    pub criterion_id: i64,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: Option<i64>,
    #[serde(rename = "id_usuario")]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    #[serde(rename = "pregunta")]
    pub text: Option<String>,
    #[serde(rename = "id_criterio")]
    pub criterion_id: Option<i64>,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub criterion_id: i64,
    pub rubric_id: Option<i64>,
    pub owner: Owner,
}
