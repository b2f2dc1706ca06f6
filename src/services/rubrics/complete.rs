use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::RubricService;
use super::get::load_readable_rubric;
use crate::models::{
    OwnershipFilter,
    questions::entities::CriterionWithQuestions,
    rubrics::responses::{CompleteRubric, RubricCategorySection},
};
use crate::services::internal_error;

pub async fn get_complete_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
) -> ActixResult<HttpResponse> {
    let rubric = match load_readable_rubric(service, request, rubric_id).await? {
        Ok(rubric) => rubric,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request)?;

    // 分类保持评分表中的顺序；只保留被选中的标准
    let mut categories = Vec::with_capacity(rubric.category_ids.len());
    for &category_id in &rubric.category_ids {
        let criteria = match storage
            .list_criteria_in_category(category_id, &rubric.criterion_ids)
            .await
        {
            Ok(criteria) => criteria,
            Err(e) => return Ok(internal_error("Error al obtener la rúbrica completa", e)),
        };

        let mut sections = Vec::with_capacity(criteria.len());
        for criterion in criteria {
            let questions = match storage
                .list_questions(OwnershipFilter::All, Some(criterion.id))
                .await
            {
                Ok(questions) => questions,
                Err(e) => return Ok(internal_error("Error al obtener la rúbrica completa", e)),
            };
            sections.push(CriterionWithQuestions {
                criterion,
                questions,
            });
        }

        categories.push(RubricCategorySection {
            id_categoria: category_id,
            criteria: sections,
        });
    }

    debug!(
        "Assembled rubric {} with {} categories",
        rubric.id,
        categories.len()
    );

    Ok(HttpResponse::Ok().json(CompleteRubric {
        id: rubric.id,
        name: rubric.name,
        owner: rubric.owner,
        criterion_ids: rubric.criterion_ids,
        categories,
    }))
}
