use serde::Deserialize;

// 用户登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 邮箱
    #[serde(rename = "correo")]
    pub email: String,
    /// 密码
    #[serde(rename = "contraseña")]
    pub password: String,
}
