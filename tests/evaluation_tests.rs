mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use common::{
    TestContext, create_category, create_criterion, create_evaluation, create_software, delete,
    get, post, put, register_and_login, send,
};

fn score_body(evaluation_id: i64, criterion_id: i64, value: f64) -> Value {
    json!({
        "id_rubrica": 0,
        "id_criterio": criterion_id,
        "id_evaluacion": evaluation_id,
        "puntaje": value,
    })
}

#[actix_web::test]
async fn test_score_value_must_be_between_one_and_five() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;

    for value in [0.0, 0.5, 5.5, 6.0] {
        let (status, _) = send(
            &app,
            post(
                "/puntajes/nuevo-puntaje",
                Some(&ana_token),
                score_body(evaluation_id, criterion_id, value),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "value {value} accepted");
    }

    for value in [1.0, 4.5, 5.0] {
        let (status, body) = send(
            &app,
            post(
                "/puntajes/nuevo-puntaje",
                Some(&ana_token),
                score_body(evaluation_id, criterion_id, value),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "value {value} rejected: {body}");
        assert_eq!(body["puntaje"], value);
    }

    let scores = ctx.storage.list_scores_by_evaluation(evaluation_id).await.unwrap();
    assert_eq!(scores.len(), 3);
    assert!(scores.iter().any(|s| s.value == 4.5));
}

#[actix_web::test]
async fn test_score_update_is_range_checked() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;

    let (_, body) = send(
        &app,
        post(
            "/puntajes/nuevo-puntaje",
            Some(&ana_token),
            score_body(evaluation_id, criterion_id, 3.0),
        ),
    )
    .await;
    let score_id = body["ID_puntaje"].as_i64().unwrap();
    let uri = format!("/puntajes/actualizar/{score_id}");

    let (status, _) = send(&app, put(&uri, Some(&ana_token), json!({ "puntaje": 9 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, put(&uri, Some(&ana_token), json!({ "puntaje": 3.5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["puntaje"], 3.5);

    // 整数写法同样接受
    let (status, body) = send(&app, put(&uri, Some(&ana_token), json!({ "puntaje": 4 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["puntaje"], 4.0);
}

#[actix_web::test]
async fn test_scores_belong_to_their_owner_only() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (ana_id, ana_token) = register_and_login(&app, "ana", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;

    // 匿名创建需指明所有者
    let mut body = score_body(evaluation_id, criterion_id, 2.0);
    body["id_usuario"] = json!(ana_id);
    let (status, body) = send(&app, post("/puntajes/nuevo-puntaje", None, body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let score_id = body["ID_puntaje"].as_i64().unwrap();

    let (status, _) = send(&app, get(&format!("/puntajes/{score_id}"), Some(&ana_token))).await;
    assert_eq!(status, StatusCode::OK);

    // 管理员对得分记录没有特权
    let (status, _) = send(&app, get(&format!("/puntajes/{score_id}"), Some(&admin_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        delete(&format!("/puntajes/eliminar/{score_id}"), Some(&admin_token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, listed) = send(&app, get("/puntajes", Some(&admin_token))).await;
    assert!(listed.as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        delete(&format!("/puntajes/eliminar/{score_id}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(ctx.storage.get_score_by_id(score_id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_completed_evaluation_is_locked() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;

    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;
    let uri = format!("/evaluaciones/actualizar/{evaluation_id}");

    let (status, body) = send(
        &app,
        put(
            &uri,
            Some(&ana_token),
            json!({ "puntaje_total": 18.0, "promedio": 4.5, "terminado": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["terminado"], true);

    for token in [&ana_token, &admin_token] {
        let (status, body) = send(&app, put(&uri, Some(token), json!({ "promedio": 1.0 }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["mensaje"],
            "No se puede modificar la evaluación porque ya está terminada."
        );
    }

    let stored = ctx
        .storage
        .get_evaluation_by_id(evaluation_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.average, Some(4.5));
    assert_eq!(stored.total_score, Some(18.0));
    assert!(stored.completed);
}

#[actix_web::test]
async fn test_complete_evaluation_view() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.configure(cfg))).await;
    let (_, admin_token) = register_and_login(&app, "admin", 0).await;
    let (_, ana_token) = register_and_login(&app, "ana", 1).await;
    let (_, beto_token) = register_and_login(&app, "beto", 1).await;

    let category_id = create_category(&app, &admin_token, "Usabilidad").await;
    let criterion_id = create_criterion(&app, &admin_token, "Aprendizaje", category_id, Some(0)).await;
    let software_id = create_software(&app, &ana_token, "Notas").await;
    let evaluation_id = create_evaluation(&app, &ana_token, software_id, 0).await;
    send(
        &app,
        post(
            "/puntajes/nuevo-puntaje",
            Some(&ana_token),
            score_body(evaluation_id, criterion_id, 4.0),
        ),
    )
    .await;

    let uri = format!("/evaluaciones/completa/{evaluation_id}");
    let (status, body) = send(&app, get(&uri, Some(&ana_token))).await;
    assert_eq!(status, StatusCode::OK);
    let view = &body["evaluacion"];
    assert_eq!(view["id_evaluacion"], evaluation_id);
    assert_eq!(view["software"]["ID_software"], software_id);
    assert_eq!(view["software"]["nombre_software"], "Notas");
    assert_eq!(view["rubrica"]["id_rubrica"], 0);
    assert_eq!(view["puntajes_criterio"].as_array().unwrap().len(), 1);
    assert_eq!(view["puntajes_criterio"][0]["puntaje"], 4.0);

    let (status, _) = send(&app, get(&uri, Some(&beto_token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, get(&uri, Some(&admin_token))).await;
    assert_eq!(status, StatusCode::OK);

    // 软件被删除后视图报告缺失的软件
    let (status, _) = send(
        &app,
        delete(&format!("/softwares/eliminar/{software_id}"), Some(&ana_token)),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, get(&uri, Some(&ana_token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "Software no encontrado");
}
