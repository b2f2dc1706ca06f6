use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::models::users::entities::UserRole;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub rol: i32,    // 签发时的用户角色
    pub exp: usize,  // Expiration time (时间戳)
    pub iat: usize,  // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// 令牌校验失败的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFailure {
    Invalid,
    Expired,
    Internal,
}

impl From<&jsonwebtoken::errors::Error> for TokenFailure {
    fn from(err: &jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenFailure::Expired,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::ImmatureSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenFailure::Invalid,
            _ => TokenFailure::Internal,
        }
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 生成 Access Token
    pub fn generate_access_token(
        config: &JwtConfig,
        user_id: i64,
        role: UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            config,
            user_id,
            role,
            chrono::Duration::minutes(config.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        config: &JwtConfig,
        user_id: i64,
        role: UserRole,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            rol: role.code(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 Access Token
    pub fn verify_access_token(
        config: &JwtConfig,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 60,
        }
    }

    #[test]
    fn test_generate_and_verify() {
        let config = config();
        let token = JwtUtils::generate_access_token(&config, 42, UserRole::Admin).unwrap();
        let claims = JwtUtils::verify_access_token(&config, &token).unwrap();
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.rol, 0);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_classified() {
        let config = config();
        let token = JwtUtils::generate_token_with_expiry(
            &config,
            7,
            UserRole::Standard,
            chrono::Duration::minutes(-5),
        )
        .unwrap();
        let err = JwtUtils::verify_access_token(&config, &token).unwrap_err();
        assert_eq!(TokenFailure::from(&err), TokenFailure::Expired);
    }

    #[test]
    fn test_garbage_token_classified() {
        let err = JwtUtils::verify_access_token(&config(), "not-a-token").unwrap_err();
        assert_eq!(TokenFailure::from(&err), TokenFailure::Invalid);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = JwtUtils::generate_access_token(&config(), 7, UserRole::Standard).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            access_token_expiry: 60,
        };
        let err = JwtUtils::verify_access_token(&other, &token).unwrap_err();
        assert_eq!(TokenFailure::from(&err), TokenFailure::Invalid);
    }
}
