mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;
use uxeval_server::utils::parameter_error_handler::{INVALID_BODY, INVALID_PATH};

use common::{
    TestContext, create_category, create_criterion, create_evaluation, create_software, delete,
    get, post, put, register_and_login, send,
};

#[actix_web::test]
async fn test_categories_are_public_and_admin_managed() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;

    let (status, body) = send(&app, get("/categorias", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, get(&format!("/categorias/{category_id}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_categoria"], "Usabilidad");

    let (status, _) = send(
        &app,
        post(
            "/categorias/nueva-categoria",
            Some(&ana_token),
            json!({ "nombre_categoria": "Seguridad" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        post("/categorias/nueva-categoria", None, json!({ "nombre_categoria": "Seguridad" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        delete(&format!("/categorias/eliminar/{category_id}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_category_by_id(category_id).await.unwrap().is_some());

    let (status, _) = send(
        &app,
        delete(&format!("/categorias/eliminar/{category_id}"), Some(&admin_token)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&format!("/categorias/{category_id}"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_public_criterion_is_readable_by_anyone_signed_in() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let public_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let private_id = create_criterion(&app, &ana_token, "Eficiencia", category_id, None).await;

    let (status, body) = send(&app, get(&format!("/criterios/{public_id}"), Some(&beto_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id_usuario"], 0);

    let (status, _) = send(&app, get(&format!("/criterios/{private_id}"), Some(&beto_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 列表只含公共的和自己的
    let (_, body) = send(&app, get("/criterios", Some(&beto_token))).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["ID_criterio"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![public_id]);

    let (_, body) = send(&app, get("/criterios", Some(&ana_token))).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        get(&format!("/criterios/categoria/{category_id}"), Some(&beto_token)),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_criterion_owner_may_only_move_category() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let first = create_category(&app, &admin_token, "Usabilidad").await;
    let second = create_category(&app, &admin_token, "Accesibilidad").await;
    let criterion_id = create_criterion(&app, &ana_token, "Eficiencia", first, None).await;
    let uri = format!("/criterios/actualizar/{criterion_id}");

    let (status, _) = send(
        &app,
        put(&uri, Some(&ana_token), json!({ "nombre_criterio": "Rapidez" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, put(&uri, Some(&beto_token), json!({ "id_categoria": second }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, put(&uri, Some(&ana_token), json!({ "id_categoria": second }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id_categoria"], second);
    assert_eq!(body["nombre_criterio"], "Eficiencia");

    let (status, body) = send(
        &app,
        put(&uri, Some(&admin_token), json!({ "nombre_criterio": "Rapidez" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_criterio"], "Rapidez");
}

#[actix_web::test]
async fn test_foreign_software_cannot_be_changed() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let software_id = create_software(&app, &ana_token, "Notas").await;

    let (status, _) = send(
        &app,
        put(
            &format!("/softwares/actualizar/{software_id}"),
            Some(&beto_token),
            json!({ "nombre_software": "Robado" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        delete(&format!("/softwares/eliminar/{software_id}"), Some(&beto_token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let stored = ctx.storage.get_software_by_id(software_id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Notas");

    let (status, body) = send(&app, get("/softwares", Some(&beto_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_anonymous_software_needs_existing_owner() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (ana_id, ana_token) = register_and_login(&app, "ana", 1).await;

    let (status, _) = send(
        &app,
        post("/softwares/nuevo-software", None, json!({ "nombre_software": "Notas" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post(
            "/softwares/nuevo-software",
            None,
            json!({ "nombre_software": "Notas", "id_usuario": 999 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post(
            "/softwares/nuevo-software",
            None,
            json!({
                "nombre_software": "Notas",
                "id_usuario": ana_id,
                "fecha_lanzamiento": "2021-03-15"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id_usuario"], ana_id);

    let (_, body) = send(&app, get("/softwares", Some(&ana_token))).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_signed_in_user_cannot_create_for_someone_else() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (ana_id, _) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let (status, _) = send(
        &app,
        post(
            "/softwares/nuevo-software",
            Some(&beto_token),
            json!({ "nombre_software": "Notas", "id_usuario": ana_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_software_by_id(1).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_foreign_evaluation_is_forbidden_but_admin_reads_it() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (ana_id, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;
    let uri = format!("/evaluaciones/{evaluation_id}");

    let (status, body) = send(&app, get(&uri, Some(&beto_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["mensaje"].is_string());

    let (status, body) = send(&app, get(&uri, Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID_evaluacion"], evaluation_id);
    assert_eq!(body["id_software"], software_id);
    assert_eq!(body["id_usuario"], ana_id);
    assert_eq!(body["terminado"], false);

    let (status, _) = send(
        &app,
        delete(&format!("/evaluaciones/eliminar/{evaluation_id}"), Some(&beto_token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_evaluation_by_id(evaluation_id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_evaluation_references_must_exist() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let software_id = create_software(&app, &ana_token, "Notas").await;

    let (status, _) = send(
        &app,
        post(
            "/evaluaciones/nueva-evaluacion",
            Some(&ana_token),
            json!({ "id_software": 404, "id_rubrica": 0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post(
            "/evaluaciones/nueva-evaluacion",
            Some(&ana_token),
            json!({ "id_software": software_id, "id_rubrica": 404 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_user_records_are_private() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (ana_id, ana_token) = register_and_login(&app, "ana", 1).await;
    let (beto_id, beto_token) = register_and_login(&app, "beto", 1).await;

    let (status, body) = send(&app, get(&format!("/usuarios/{ana_id}"), Some(&ana_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["usuario"], "ana");

    let (status, _) = send(&app, get(&format!("/usuarios/{ana_id}"), Some(&beto_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, delete(&format!("/usuarios/{beto_id}"), Some(&ana_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(ctx.storage.get_user_by_id(beto_id).await.unwrap().is_some());

    let (status, body) = send(&app, get("/usuarios", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, get("/usuarios/999", Some(&admin_token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_path_and_body_are_bad_requests() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;

    let (status, body) = send(&app, get("/categorias/abc", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], INVALID_PATH);

    let req = test::TestRequest::post()
        .uri("/categorias/nueva-categoria")
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json");
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], INVALID_BODY);

    // 类型不符时解析器的细节不能出现在响应里
    let (status, body) = send(
        &app,
        post(
            "/categorias/nueva-categoria",
            Some(&admin_token),
            json!({ "nombre_categoria": 42 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], INVALID_BODY);
    let text = body.to_string();
    assert!(!text.contains("invalid type"), "{text}");
    assert!(!text.contains("line"), "{text}");
}
