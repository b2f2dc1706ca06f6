mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{
    TestContext, create_category, create_criterion, delete, get, post, put, register_and_login,
    send,
};

#[actix_web::test]
async fn test_general_rubric_is_seeded_and_public() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;

    let (status, body) = send(&app, get("/rubricas/0", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID_rubrica"], 0);
    assert_eq!(body["id_usuario"], 0);

    let (status, body) = send(&app, get("/rubricas/completa/0", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["categorias"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_complete_general_rubric_filters_unselected_criteria() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let selected = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let skipped = create_criterion(&app, &admin_token, "Memorabilidad", category_id, Some(0)).await;

    let (status, _) = send(
        &app,
        put(
            "/rubricas/actualizar/0",
            Some(&admin_token),
            json!({ "categorias": [category_id], "criterios": [selected] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/rubricas/completa/0", None)).await;
    assert_eq!(status, StatusCode::OK);

    let categories = body["categorias"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["id_categoria"], category_id);

    let criteria = categories[0]["criterios"].as_array().unwrap();
    let ids: Vec<i64> = criteria
        .iter()
        .map(|c| c["ID_criterio"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![selected]);
    assert!(!ids.contains(&skipped));
}

#[actix_web::test]
async fn test_rubric_end_to_end() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (admin_id, admin_token) = register_and_login(&app, "admin", 0).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;

    let (status, body) = send(
        &app,
        post(
            "/rubricas/nueva-rubrica",
            Some(&admin_token),
            json!({
                "nombre_rubrica": "Rúbrica de prueba",
                "categorias": [category_id],
                "criterios": [criterion_id]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id_usuario"], admin_id);
    let rubric_id = body["ID_rubrica"].as_i64().unwrap();
    assert!(rubric_id > 0);

    let (status, body) = send(
        &app,
        get(&format!("/rubricas/completa/{rubric_id}"), Some(&admin_token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_rubrica"], "Rúbrica de prueba");

    let categories = body["categorias"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    let criteria = categories[0]["criterios"].as_array().unwrap();
    assert_eq!(criteria.len(), 1);
    assert_eq!(criteria[0]["ID_criterio"], criterion_id);
    assert_eq!(criteria[0]["nombre_criterio"], "Aprendizaje");
    assert_eq!(criteria[0]["preguntas"], json!([]));
}

#[actix_web::test]
async fn test_complete_rubric_nests_questions() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;

    let (status, body) = send(
        &app,
        post(
            "/preguntas/nueva-pregunta",
            Some(&ana_token),
            json!({ "pregunta": "¿Es fácil de aprender?", "id_criterio": criterion_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let question_id = body["ID_pregunta"].as_i64().unwrap();

    let (_, body) = send(
        &app,
        post(
            "/rubricas/nueva-rubrica",
            Some(&ana_token),
            json!({
                "nombre_rubrica": "Mi rúbrica",
                "categorias": [category_id],
                "criterios": [criterion_id]
            }),
        ),
    )
    .await;
    let rubric_id = body["ID_rubrica"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        get(&format!("/rubricas/completa/{rubric_id}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions = &body["categorias"][0]["criterios"][0]["preguntas"];
    assert_eq!(questions.as_array().unwrap().len(), 1);
    assert_eq!(questions[0]["ID_pregunta"], question_id);
}

#[actix_web::test]
async fn test_private_rubric_access() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let (_, body) = send(
        &app,
        post(
            "/rubricas/nueva-rubrica",
            Some(&ana_token),
            json!({ "nombre_rubrica": "Privada" }),
        ),
    )
    .await;
    let rubric_id = body["ID_rubrica"].as_i64().unwrap();

    let (status, _) = send(&app, get(&format!("/rubricas/{rubric_id}"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get(&format!("/rubricas/{rubric_id}"), Some(&beto_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, get(&format!("/rubricas/{rubric_id}"), Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);

    // 非所有者修改按不存在处理
    let (status, body) = send(
        &app,
        put(
            &format!("/rubricas/actualizar/{rubric_id}"),
            Some(&beto_token),
            json!({ "nombre_rubrica": "Ajena" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["mensaje"],
        "Rúbrica no encontrada o no tienes permiso para modificarla."
    );
    let stored = ctx.storage.get_rubric_by_id(rubric_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Privada");

    // 管理员可以读取，但不能改别人的评分表
    let (status, _) = send(
        &app,
        put(
            &format!("/rubricas/actualizar/{rubric_id}"),
            Some(&admin_token),
            json!({ "nombre_rubrica": "Del admin" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let stored = ctx.storage.get_rubric_by_id(rubric_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Privada");

    let (status, body) = send(
        &app,
        put(
            &format!("/rubricas/actualizar/{rubric_id}"),
            Some(&ana_token),
            json!({ "nombre_rubrica": "Privada v2" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_rubrica"], "Privada v2");

    // 列表：通用评分表加上自己的
    let (_, body) = send(&app, get("/rubricas", Some(&beto_token))).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ID_rubrica"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![0]);

    let (_, body) = send(&app, get("/rubricas", Some(&ana_token))).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_general_rubric_deletion_is_admin_only() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let (status, body) = send(&app, delete("/rubricas/eliminar/0", Some(&ana_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["mensaje"],
        "No tienes permisos para eliminar la rúbrica general."
    );
    assert!(ctx.storage.get_rubric_by_id(0).await.unwrap().is_some());

    let (status, _) = send(&app, delete("/rubricas/eliminar/0", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(ctx.storage.get_rubric_by_id(0).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_rubric_selection_must_exist() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let (status, _) = send(
        &app,
        post(
            "/rubricas/nueva-rubrica",
            Some(&ana_token),
            json!({ "nombre_rubrica": "Rota", "categorias": [77] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_questions_by_category() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let empty_category = create_category(&app, &admin_token, "Vacía").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;

    send(
        &app,
        post(
            "/preguntas/nueva-pregunta",
            Some(&ana_token),
            json!({ "pregunta": "¿Es intuitivo?", "id_criterio": criterion_id }),
        ),
    )
    .await;
    // 标准用户只能为自己创建问题
    let (status, _) = send(
        &app,
        post(
            "/preguntas/nueva-pregunta",
            Some(&ana_token),
            json!({ "pregunta": "¿Pública?", "id_criterio": criterion_id, "id_usuario": 0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        get(&format!("/preguntas/categoria/{category_id}"), Some(&beto_token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["criterio"]["ID_criterio"], criterion_id);
    // ana 的问题对 beto 不可见
    assert_eq!(groups[0]["preguntas"].as_array().unwrap().len(), 0);

    let (_, body) = send(
        &app,
        get(&format!("/preguntas/categoria/{category_id}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(body[0]["preguntas"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        get(&format!("/preguntas/categoria/{empty_category}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "No se encontraron criterios para esta categoría");
}

#[actix_web::test]
async fn test_admin_cannot_create_questions() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;

    let (status, body) = send(
        &app,
        post(
            "/preguntas/nueva-pregunta",
            Some(&admin_token),
            json!({ "pregunta": "¿Es intuitivo?", "id_criterio": criterion_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["mensaje"], "No tienes permisos para crear preguntas.");
}
