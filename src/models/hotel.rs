use serde::{Deserialize, Serialize};

/// A row of the `hoteis` table. JSON keys follow the column names the mobile
/// client reads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    pub id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    #[serde(rename = "cidade")]
    #[sqlx(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    #[sqlx(rename = "estado")]
    pub state: String,
    #[serde(rename = "preco")]
    #[sqlx(rename = "preco")]
    pub price: f64,
    #[serde(rename = "descricao")]
    #[sqlx(rename = "descricao")]
    pub description: String,
    #[serde(rename = "avaliacao")]
    #[sqlx(rename = "avaliacao")]
    pub rating: Option<f64>,
    #[serde(rename = "imagem_url")]
    #[sqlx(rename = "imagem_url")]
    pub image_url: Option<String>,
}
