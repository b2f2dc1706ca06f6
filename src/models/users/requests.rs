use super::entities::UserRole;
use serde::Deserialize;

// 用户注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido_p")]
    pub paternal_surname: String,
    #[serde(rename = "apellido_m")]
    pub maternal_surname: String,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contraseña")]
    pub password: String,
    #[serde(rename = "rol")]
    pub role: UserRole,
}

// 用户更新请求，只更新提供的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido_p")]
    pub paternal_surname: Option<String>,
    #[serde(rename = "apellido_m")]
    pub maternal_surname: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
    #[serde(rename = "contraseña")]
    pub password: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<UserRole>,
}
