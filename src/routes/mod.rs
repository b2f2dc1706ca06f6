pub mod categories;

pub mod criteria;

pub mod evaluations;

pub mod questions;

pub mod rubrics;

pub mod scores;

pub mod softwares;

pub mod users;

pub use categories::configure_categories_routes;
pub use criteria::configure_criteria_routes;
pub use evaluations::configure_evaluations_routes;
pub use questions::configure_questions_routes;
pub use rubrics::configure_rubrics_routes;
pub use scores::configure_scores_routes;
pub use softwares::configure_softwares_routes;
pub use users::configure_user_routes;

use actix_web::web;

// 挂载全部资源路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_user_routes)
        .configure(configure_categories_routes)
        .configure(configure_criteria_routes)
        .configure(configure_questions_routes)
        .configure(configure_rubrics_routes)
        .configure(configure_softwares_routes)
        .configure(configure_evaluations_routes)
        .configure(configure_scores_routes);
}
