use serde::Deserialize;

use crate::models::Owner;
use crate::models::common::datetime::deserialize_optional_date;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSoftwareRequest {
    #[serde(rename = "nombre_software")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(
        rename = "fecha_lanzamiento",
        default,
        deserialize_with = "deserialize_optional_date"
    )]
    pub release_date: Option<chrono::DateTime<chrono::Utc>>,
    /// 匿名创建时必须提供
    #[serde(rename = "id_usuario")]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSoftwareRequest {
    #[serde(rename = "nombre_software")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(
        rename = "fecha_lanzamiento",
        default,
        deserialize_with = "deserialize_optional_date"
    )]
    pub release_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewSoftware {
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<chrono::DateTime<chrono::Utc>>,
    pub owner_id: i64,
}
