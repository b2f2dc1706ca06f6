use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::scores::entities::{MAX_SCORE, MIN_SCORE};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,32}$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 3 到 32 位，只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err(
            "El usuario debe tener entre 3 y 32 caracteres: letras, números, guiones o guiones bajos",
        );
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("El formato del correo no es válido");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 至少 8 个字符，同时包含字母和数字，且不是常见弱密码。
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("La contraseña debe tener al menos 8 caracteres");
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        errors.push("La contraseña debe contener al menos una letra");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("La contraseña debe contener al menos un número");
    }

    let weak_passwords = [
        "password",
        "password1",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "abcd1234",
        "contraseña1",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.to_lowercase() == weak)
    {
        errors.push("La contraseña es demasiado común");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// 必填文本字段不能为空白
pub fn validate_required_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("El campo '{field}' es obligatorio"));
    }
    Ok(())
}

/// 标准得分必须在 1..=5 之间，允许小数
pub fn validate_score(value: f64) -> Result<(), String> {
    // NaN 不落在任何区间内，这里显式拒绝
    if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(format!(
            "El puntaje debe estar entre {MIN_SCORE} y {MAX_SCORE}, se recibió {value}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("ana_lopez").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("con espacio").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("ana.example.com").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Secreta123").is_ok());
        assert!(validate_password("corta1").is_err());
        assert!(validate_password("sinnumeros").is_err());
        assert!(validate_password("1234567890").is_err());
        let err = validate_password("Password1").unwrap_err();
        assert!(err.contains("demasiado común"));
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("nombre_categoria", "Usabilidad").is_ok());
        assert!(validate_required_text("nombre_categoria", "   ").is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0.0).is_err());
        assert!(validate_score(0.5).is_err());
        assert!(validate_score(1.0).is_ok());
        assert!(validate_score(4.5).is_ok());
        assert!(validate_score(5.0).is_ok());
        assert!(validate_score(5.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_score(f64::INFINITY).is_err());
    }
}
