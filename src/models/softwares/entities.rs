use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Software {
    #[serde(rename = "ID_software")]
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub owner_id: i64,
    #[serde(rename = "nombre_software")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "fecha_lanzamiento")]
    pub release_date: Option<chrono::DateTime<chrono::Utc>>,
}
