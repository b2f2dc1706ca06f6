use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// 解析日期：接受 RFC 3339 时间戳或 `YYYY-MM-DD`
pub fn parse_flexible_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// serde 辅助：可选日期字段
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_flexible_date(s.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("fecha inválida: '{s}'"))),
    }
}

/// 时间戳（秒）转换为 UTC 时间，超出范围时回退到 Unix 纪元
pub fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
