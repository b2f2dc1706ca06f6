//! 集成测试共用的应用构建与请求辅助函数
#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, test, web};
use serde_json::{Value, json};

use uxeval_server::config::{AppConfig, Argon2Config, DatabaseConfig};
use uxeval_server::routes;
use uxeval_server::storage::{Storage, create_storage};
use uxeval_server::utils::{json_error_handler, path_error_handler, query_error_handler};

pub const PASSWORD: &str = "Segura2024";

pub struct TestContext {
    pub config: AppConfig,
    pub storage: Arc<dyn Storage>,
}

impl TestContext {
    /// 每个测试使用独立的内存数据库
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        config.jwt.secret = "integration-test-secret".to_string();
        // 降低哈希成本，加快测试
        config.argon2 = Argon2Config {
            memory_cost: 64,
            time_cost: 1,
            parallelism: 1,
        };

        let storage = create_storage(&config.database)
            .await
            .expect("in-memory storage");

        Self { config, storage }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.storage.clone()))
            .configure(routes::configure_routes);
    }
}

/// 发送请求，返回状态码和 JSON 响应体（空响应体为 `Value::Null`）
pub async fn send<S, B>(app: &S, req: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

pub fn get(uri: &str, token: Option<&str>) -> test::TestRequest {
    with_token(test::TestRequest::get().uri(uri), token)
}

pub fn post(uri: &str, token: Option<&str>, body: Value) -> test::TestRequest {
    with_token(test::TestRequest::post().uri(uri), token).set_json(body)
}

pub fn put(uri: &str, token: Option<&str>, body: Value) -> test::TestRequest {
    with_token(test::TestRequest::put().uri(uri), token).set_json(body)
}

pub fn delete(uri: &str, token: Option<&str>) -> test::TestRequest {
    with_token(test::TestRequest::delete().uri(uri), token)
}

fn with_token(req: test::TestRequest, token: Option<&str>) -> test::TestRequest {
    match token {
        Some(token) => req.insert_header(("Authorization", format!("Bearer {token}"))),
        None => req,
    }
}

pub fn registration(username: &str, role: i32) -> Value {
    json!({
        "nombre": "Prueba",
        "apellido_p": "Pérez",
        "apellido_m": "Gómez",
        "usuario": username,
        "correo": format!("{username}@example.com"),
        "contraseña": PASSWORD,
        "rol": role,
    })
}

/// 注册并登录，返回 (用户编号, 令牌)
pub async fn register_and_login<S, B>(app: &S, username: &str, role: i32) -> (i64, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        post("/usuarios/registro", None, registration(username, role)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    let user_id = body["usuario"]["ID_usuario"].as_i64().expect("user id");

    let (status, body) = send(
        app,
        post(
            "/usuarios/iniciar-sesion",
            None,
            json!({ "correo": format!("{username}@example.com"), "contraseña": PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();

    (user_id, token)
}

async fn create_and_read_id<S, B>(app: &S, req: test::TestRequest, id_field: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body[id_field].as_i64().expect("created id")
}

pub async fn create_category<S, B>(app: &S, admin_token: &str, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    create_and_read_id(
        app,
        post(
            "/categorias/nueva-categoria",
            Some(admin_token),
            json!({ "nombre_categoria": name, "descripcion": "Categoría de prueba" }),
        ),
        "ID_categoria",
    )
    .await
}

/// `owner` 为 `None` 时归属调用者本人
pub async fn create_criterion<S, B>(
    app: &S,
    token: &str,
    name: &str,
    category_id: i64,
    owner: Option<i64>,
) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut body = json!({ "nombre_criterio": name, "id_categoria": category_id });
    if let Some(owner) = owner {
        body["id_usuario"] = json!(owner);
    }
    create_and_read_id(
        app,
        post("/criterios/nuevo-criterio", Some(token), body),
        "ID_criterio",
    )
    .await
}

pub async fn create_software<S, B>(app: &S, token: &str, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    create_and_read_id(
        app,
        post(
            "/softwares/nuevo-software",
            Some(token),
            json!({ "nombre_software": name, "descripcion": "Editor de texto" }),
        ),
        "ID_software",
    )
    .await
}

pub async fn create_evaluation<S, B>(app: &S, token: &str, software_id: i64, rubric_id: i64) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    create_and_read_id(
        app,
        post(
            "/evaluaciones/nueva-evaluacion",
            Some(token),
            json!({ "id_software": software_id, "id_rubrica": rubric_id }),
        ),
        "ID_evaluacion",
    )
    .await
}
