use serde::{Deserialize, Serialize};

// 分类，没有所有者，全局可见
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(rename = "ID_categoria")]
    pub id: i64,
    #[serde(rename = "nombre_categoria")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}
