use serde::{Deserialize, Serialize};

use super::entities::Question;
use crate::models::criteria::entities::Criterion;

/// 按分类浏览问题时的分组
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionQuestionsGroup {
    #[serde(rename = "criterio")]
    pub criterion: Criterion,
    #[serde(rename = "preguntas")]
    pub questions: Vec<Question>,
}
