use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre_categoria")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "nombre_categoria")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}
