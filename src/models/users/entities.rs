use serde::{Deserialize, Serialize};

// 用户角色，对外和存储层都使用整数 0 / 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,    // 管理员
    Standard, // 普通用户
}

impl UserRole {
    pub const ADMIN_CODE: i32 = 0;
    pub const STANDARD_CODE: i32 = 1;

    pub fn code(self) -> i32 {
        match self {
            UserRole::Admin => Self::ADMIN_CODE,
            UserRole::Standard => Self::STANDARD_CODE,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::ADMIN_CODE => Some(UserRole::Admin),
            Self::STANDARD_CODE => Some(UserRole::Standard),
            _ => None,
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        UserRole::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "rol inválido: {code}. Valores permitidos: 0 (administrador), 1 (estándar)"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Standard => write!(f, "standard"),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID_usuario")]
    pub id: i64,
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
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    #[serde(rename = "rol")]
    pub role: UserRole,
    #[serde(rename = "fecha_registro")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "0");
        assert_eq!(serde_json::from_str::<UserRole>("1").unwrap(), UserRole::Standard);
        assert!(serde_json::from_str::<UserRole>("2").is_err());
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: 1,
            first_name: "Ana".into(),
            paternal_surname: "López".into(),
            maternal_surname: "Ruiz".into(),
            username: "ana".into(),
            email: "ana@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            role: UserRole::Standard,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2id"));
        assert_eq!(json["usuario"], "ana");
        assert_eq!(json["rol"], 1);
    }
}
