use serde::{Deserialize, Serialize};

use crate::models::Owner;
use crate::models::criteria::entities::Criterion;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    #[serde(rename = "ID_pregunta")]
    pub id: i64,
    #[serde(rename = "pregunta")]
    pub text: String,
    #[serde(rename = "id_criterio")]
    pub criterion_id: i64,
    #[serde(rename = "id_rubrica")]
    pub rubric_id: Option<i64>,
    #[serde(rename = "id_usuario")]
    pub owner: Owner,
}

// 标准及其下的问题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionWithQuestions {
    #[serde(flatten)]
    pub criterion: Criterion,
    #[serde(rename = "preguntas")]
    pub questions: Vec<Question>,
}
